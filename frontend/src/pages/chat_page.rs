//! Conversational assistant page.

use dioxus::prelude::*;

use common::chat::ChatRequest;

use crate::api::chat_api::send_message;
use crate::components::chat_components::chat_input::ChatInput;
use crate::components::chat_components::chat_log::ChatLog;
use crate::data_definitions::chat_thread::{new_session_id, ChatEntry};

#[component]
pub fn ChatPage() -> Element {
    rsx! {
        Title { "Quán Ngon - Chatbot" }
        ChatRoot {}
    }
}

#[component]
fn ChatRoot() -> Element {
    let session_id = use_signal(new_session_id);
    let mut entries = use_signal(Vec::<ChatEntry>::new);
    let mut is_sending = use_signal(|| false);

    let send = Callback::new(move |text: String| {
        if *is_sending.peek() {
            return;
        }
        entries.write().push(ChatEntry::from_user(text.clone()));
        is_sending.set(true);
        spawn(async move {
            let request = ChatRequest {
                session_id: session_id.peek().clone(),
                user_text_input: text,
                images: Vec::new(),
            };
            let reply = send_message(request).await;
            let entry = match reply {
                Ok(reply) if reply.is_success() => {
                    ChatEntry::from_assistant(reply.messages, reply.res_id)
                }
                // The service reports failures in-band; show them instead of
                // dropping the turn.
                Ok(reply) if !reply.messages.is_empty() => ChatEntry::failure(reply.messages),
                Ok(_) => ChatEntry::failure("Không thể nhận câu trả lời. Thử lại sau."),
                Err(e) => ChatEntry::failure(format!("Error: {e}")),
            };
            entries.write().push(entry);
            is_sending.set(false);
        });
    });

    rsx! {
        div {
            id: "x-chat-page",
            style: "
                height: 100%;
                max-width: 820px;
                margin: 0 auto;
                padding: 24px;
                box-sizing: border-box;
                display: flex;
                flex-direction: column;
                gap: 12px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between;",
                h2 { style: "margin: 0; font-size: 24px; color: #262626;", "Trợ lý Quán Ngon" }
                // Clears the transcript only; the session id stays, so the
                // assistant keeps its conversational memory.
                button {
                    style: "
                        background: none;
                        border: 1px solid #d9d9d9;
                        border-radius: 6px;
                        padding: 6px 12px;
                        font-size: 13px;
                        color: #595959;
                        cursor: pointer;
                    ",
                    onclick: move |_| entries.write().clear(),
                    "Cuộc trò chuyện mới"
                }
            }
            div {
                style: "
                    flex-grow: 1;
                    min-height: 0;
                    background-color: #ffffff;
                    border: 1px solid #f0f0f0;
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                ",
                ChatLog { entries, is_sending }
            }
            ChatInput { on_send: send, disabled: is_sending }
        }
    }
}
