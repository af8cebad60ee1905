//! Transcript view of the chat assistant page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdStore;
use dioxus_free_icons::Icon;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::chat_thread::{ChatEntry, ChatSpeaker};
use crate::routes::Route;

#[component]
pub fn ChatLog(entries: ReadSignal<Vec<ChatEntry>>, is_sending: ReadSignal<bool>) -> Element {
    let mut log_tail = use_signal(|| None::<Event<MountedData>>);

    // Whenever the transcript grows (or the typing bubble appears), keep the
    // newest message in view.
    use_effect(move || {
        let _ = entries.read();
        let _ = is_sending.read();
        if let Some(tail) = log_tail.read().as_ref() {
            let _x = tail.scroll_to_with_options(ScrollToOptions {
                behavior: ScrollBehavior::Smooth,
                vertical: ScrollLogicalPosition::End,
                horizontal: ScrollLogicalPosition::Nearest,
            });
        }
    });

    rsx! {
        div {
            id: "x-chat-log",
            style: "
                flex-grow: 1;
                overflow-y: auto;
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
            ",
            if entries.read().is_empty() {
                h3 {
                    style: "text-align: center; color: #595959; margin-top: 48px; font-weight: 500;",
                    "Bạn muốn hỏi gì về các nhà hàng?"
                }
            }
            for (index, entry) in entries().into_iter().enumerate() {
                ChatBubble { key: "{index}", entry }
            }
            if is_sending() {
                div {
                    style: "
                        align-self: flex-start;
                        background-color: #ffffff;
                        border: 1px solid #f0f0f0;
                        border-radius: 16px 16px 16px 4px;
                        padding: 10px 16px;
                    ",
                    LoadingIndicator {}
                }
            }
            div {
                onmounted: move |event| log_tail.set(Some(event)),
            }
        }
    }
}

#[component]
fn ChatBubble(entry: ChatEntry) -> Element {
    let (bubble_background, bubble_border, bubble_color) = if entry.failed {
        ("#fff1f0", "#ffa39e", "#cf1322")
    } else {
        match entry.speaker {
            ChatSpeaker::User => ("#fa541c", "#fa541c", "#ffffff"),
            ChatSpeaker::Assistant => ("#ffffff", "#f0f0f0", "#262626"),
        }
    };
    let (bubble_align, bubble_corners) = match entry.speaker {
        ChatSpeaker::User => ("flex-end", "16px 16px 4px 16px"),
        ChatSpeaker::Assistant => ("flex-start", "16px 16px 16px 4px"),
    };
    // The assistant sends ids as strings; skip any the router cannot take.
    let recommended: Vec<u64> = entry
        .recommended_ids
        .iter()
        .filter_map(|id| id.parse().ok())
        .collect();

    rsx! {
        div {
            style: "
                align-self: {bubble_align};
                max-width: 75%;
                background-color: {bubble_background};
                border: 1px solid {bubble_border};
                border-radius: {bubble_corners};
                padding: 10px 16px;
                color: {bubble_color};
            ",
            p {
                style: "margin: 0; font-size: 14px; line-height: 1.6; white-space: pre-wrap; overflow-wrap: break-word;",
                "{entry.text}"
            }
            if !recommended.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; margin-top: 10px;",
                    for restaurant_id in recommended {
                        Link {
                            key: "{restaurant_id}",
                            to: Route::RestaurantDetailPage { restaurant_id },
                            style: "
                                display: flex;
                                align-items: center;
                                gap: 4px;
                                background-color: #fff2e8;
                                color: #d4380d;
                                border: 1px solid #ffbb96;
                                border-radius: 12px;
                                padding: 2px 10px;
                                font-size: 13px;
                                text-decoration: none;
                            ",
                            Icon { icon: MdStore, style: "width: 14px; height: 14px;" }
                            "Xem quán {restaurant_id}"
                        }
                    }
                }
            }
        }
    }
}
