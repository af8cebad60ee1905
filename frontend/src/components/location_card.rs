//! Prompt card asking for the browser position.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_maps_icons::MdMyLocation;
use dioxus_free_icons::Icon;

use crate::data_definitions::geolocation::LocationState;

/// Shown until the user grants a position or clicks the prompt away; both
/// outcomes are remembered across visits.
#[component]
pub fn LocationRequestCard() -> Element {
    let location = use_context::<LocationState>();
    if location.coordinates.read().is_some() || *location.prompt_dismissed.read() {
        return rsx! {};
    }

    let loading = *location.loading.read();
    let request_label = if loading { "Đang xác định..." } else { "Cho phép" };
    let error_line = match location.error.read().as_ref() {
        Some(message) => rsx! {
            span {
                style: "color: #cf1322; font-size: 12px;",
                "{message}"
            }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            id: "x-location-request-card",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                background-color: #ffffff;
                border: 1px solid #ffd591;
                border-radius: 8px;
                padding: 14px 18px;
            ",
            Icon { icon: MdMyLocation, style: "width: 28px; height: 28px; color: #fa541c; flex-shrink: 0;" }
            div {
                style: "display: flex; flex-direction: column; gap: 2px; flex-grow: 1;",
                span {
                    style: "font-size: 15px; font-weight: 600; color: #262626;",
                    "Bật dịch vụ vị trí"
                }
                span {
                    style: "font-size: 13px; color: #8c8c8c;",
                    "Cho phép chúng tôi hiển thị các nhà hàng gần bạn và tính toán khoảng cách."
                }
                {error_line}
            }
            button {
                style: "
                    background-color: #fa541c;
                    color: #ffffff;
                    border: none;
                    border-radius: 6px;
                    padding: 8px 18px;
                    font-size: 14px;
                    cursor: pointer;
                    flex-shrink: 0;
                ",
                disabled: loading,
                onclick: move |_| location.request.call(()),
                "{request_label}"
            }
            button {
                style: "
                    background: none;
                    color: #8c8c8c;
                    border: none;
                    font-size: 13px;
                    cursor: pointer;
                    flex-shrink: 0;
                ",
                onclick: move |_| location.dismiss_prompt.call(()),
                "Không phải bây giờ"
            }
        }
    }
}
