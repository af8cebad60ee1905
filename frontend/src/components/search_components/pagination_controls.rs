//! Previous/next pager used by every paged list.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};
use dioxus_free_icons::{Icon, IconShape};

use common::listing::total_pages;

#[component]
pub fn PaginationControls(
    current_page: ReadSignal<u32>,
    total_items: ReadSignal<u64>,
    page_size: usize,
    on_page_change: Callback<u32>,
) -> Element {
    let max_pages = use_memo(move || total_pages(total_items() as usize, page_size));
    // A page index beyond the end (stale URL, shrunken result set) displays
    // clamped; the next interaction writes the clamped value back.
    let selected_page = use_memo(move || current_page().clamp(1, max_pages().max(1)));
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < max_pages());

    if max_pages() <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 18px 0;
            ",

            NavigationButton {
                icon: MdArrowBack,
                label: "Trang trước",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { on_page_change(selected_page() - 1); }
            }
            // current page counter
            div {
                style: "
                    font-size: 15px;
                    font-weight: 400;
                    color: #262626;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0, 0, 0, 0.45);",
                    " / {max_pages()}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Trang sau",
                disabled: !can_go_to_next_page(),
                onclick: move |_| { on_page_change(selected_page() + 1); }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,0.8)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: 1px solid #d9d9d9;
                border-radius: 8px;
                padding: 4px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
