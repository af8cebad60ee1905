//! Message composer pinned under the chat transcript.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowUpward;
use dioxus_free_icons::Icon;

#[component]
pub fn ChatInput(on_send: Callback<String>, disabled: ReadSignal<bool>) -> Element {
    let mut draft = use_signal(String::new);

    let submit = move |_: ()| {
        // One question at a time; the send stays blocked until the
        // assistant has answered the previous one.
        if *disabled.peek() {
            return;
        }
        let message = draft.peek().trim().to_string();
        if message.is_empty() {
            return;
        }
        draft.set(String::new());
        on_send(message);
    };

    let placeholder = if disabled() { "Đang trả lời..." } else { "Hỏi gì đó..." };
    let can_send = !disabled() && !draft.read().trim().is_empty();
    let send_background = if can_send { "#fa541c" } else { "#d9d9d9" };
    let send_cursor = if can_send { "pointer" } else { "not-allowed" };

    rsx! {
        div {
            id: "x-chat-input",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                background-color: #ffffff;
                border: 1px solid #d9d9d9;
                border-radius: 16px;
                padding: 8px 8px 8px 16px;
            ",
            input {
                style: "flex-grow: 1; border: none; outline: none; font-size: 14px; background: transparent;",
                r#type: "text",
                value: "{draft}",
                placeholder: "{placeholder}",
                autocomplete: "off",
                oninput: move |event| draft.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        submit(());
                    }
                },
            }
            button {
                title: "Gửi",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    border: none;
                    border-radius: 50%;
                    background-color: {send_background};
                    color: #ffffff;
                    cursor: {send_cursor};
                ",
                onclick: move |_| submit(()),
                Icon { icon: MdArrowUpward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
