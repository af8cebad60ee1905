//! Dropdown of quick matches under the search input.

use dioxus::prelude::*;

use common::location::district_name;
use common::restaurant::Restaurant;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;

#[component]
pub fn SuggestionPopup(
    suggestions: ReadSignal<Option<Result<Vec<Restaurant>, ServerFnError>>>,
) -> Element {
    rsx! {
        div {
            id: "x-suggestion-popup",
            style: "
                position: absolute;
                top: calc(100% + 4px);
                left: 0;
                right: 0;
                z-index: 40;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                box-shadow: 0 6px 16px rgba(0, 0, 0, 0.12);
                overflow: hidden;
            ",
            match suggestions.read().as_ref() {
                None => rsx! { LoadingIndicator {} },
                // A failed lookup degrades to the empty popup; submitting the
                // full search stays available.
                Some(Err(_)) => rsx! { NoSuggestionRow {} },
                Some(Ok(results)) if results.is_empty() => rsx! { NoSuggestionRow {} },
                Some(Ok(results)) => rsx! {
                    for restaurant in results.clone() {
                        SuggestionRow { key: "{restaurant.id}", restaurant }
                    }
                },
            }
        }
    }
}

#[component]
fn SuggestionRow(restaurant: Restaurant) -> Element {
    let district = district_name(&restaurant.district_id)
        .unwrap_or(&restaurant.district_id)
        .to_string();
    let restaurant_id = restaurant.id;
    rsx! {
        div {
            class: "x-suggestion-row",
            style: "display: flex; flex-direction: column; gap: 2px; padding: 8px 12px; cursor: pointer;",
            // mousedown beats the input's focusout, which closes the popup
            onmousedown: move |_| {
                navigator().push(Route::RestaurantDetailPage { restaurant_id });
            },
            span {
                style: "font-size: 14px; font-weight: 600; color: #262626;",
                "{restaurant.name}"
            }
            span {
                style: "font-size: 12px; color: #8c8c8c;",
                "{district} • {restaurant.food_type_name}"
            }
        }
    }
}

#[component]
fn NoSuggestionRow() -> Element {
    rsx! {
        div {
            style: "padding: 12px; font-size: 13px; color: #8c8c8c; text-align: center;",
            "No results found"
        }
    }
}
