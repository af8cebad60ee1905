//! Debounced search input with a suggestion popup.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::restaurant_const::{SUGGESTION_DEBOUNCE_MS, SUGGESTION_LIMIT};

use crate::api::restaurant_api::search_restaurants_cached;
use crate::components::search_components::suggestion_popup::SuggestionPopup;
use crate::data_definitions::search_cache::QueryCaches;
use crate::routes::Route;

/// Sits out the typing pause in the browser. Server rendering skips the
/// pause so suspense resolves without an artificial delay.
async fn debounce_pause() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(SUGGESTION_DEBOUNCE_MS).await;
}

#[component]
pub fn SearchBar(initial_term: ReadSignal<String>, placeholder: String) -> Element {
    let caches = use_context::<QueryCaches>();
    let mut draft = use_signal(|| initial_term());
    let mut popup_open = use_signal(|| false);

    // Keep the input in step when navigation changes the committed term.
    use_effect(move || {
        let term = initial_term();
        draft.set(term);
    });

    // The draft read is tracked, so every keystroke drops the in-flight
    // future and opens a fresh debounce window; only the last request of a
    // burst ever resolves into the popup.
    let mut suggestions = use_resource(move || {
        let term = draft.read().trim().to_string();
        async move {
            if term.is_empty() {
                return Ok(Vec::new());
            }
            debounce_pause().await;
            search_restaurants_cached(term, SUGGESTION_LIMIT, caches.searches).await
        }
    });
    use_effect(move || {
        let _ = draft.read();
        suggestions.clear();
        suggestions.restart();
    });

    let submit = move |_: ()| {
        let term = draft.peek().trim().to_string();
        if term.is_empty() {
            return;
        }
        popup_open.set(false);
        navigator().push(Route::search_for_term(&term));
    };

    rsx! {
        div {
            id: "x-search-bar",
            style: "position: relative; width: 100%;",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    background-color: #ffffff;
                    border: 1px solid #d9d9d9;
                    border-radius: 8px;
                    padding: 6px 12px;
                ",
                input {
                    style: "flex-grow: 1; border: none; outline: none; font-size: 14px; background: transparent;",
                    r#type: "text",
                    value: "{draft}",
                    placeholder: "{placeholder}",
                    oninput: move |event| {
                        draft.set(event.value());
                        popup_open.set(true);
                    },
                    onfocusin: move |_| popup_open.set(true),
                    onfocusout: move |_| popup_open.set(false),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            submit(());
                        }
                    },
                }
                button {
                    title: "Tìm kiếm",
                    style: "display: flex; align-items: center; border: none; background: none; cursor: pointer; color: #fa541c; padding: 0;",
                    onclick: move |_| submit(()),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                }
            }
            if popup_open() && !draft.read().trim().is_empty() {
                SuggestionPopup { suggestions: suggestions.into() }
            }
        }
    }
}
