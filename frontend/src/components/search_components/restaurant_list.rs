//! Result grid with loading, empty and paged states.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::restaurant::Restaurant;
use common::restaurant_const::PAGE_SIZE;

use crate::components::search_components::pagination_controls::PaginationControls;
use crate::components::search_components::restaurant_card::RestaurantCard;
use crate::components::suspend_boundary::LoadingIndicator;

#[component]
pub fn RestaurantList(
    loading: ReadSignal<bool>,
    failed: ReadSignal<bool>,
    restaurants: ReadSignal<Vec<Restaurant>>,
    total_results: ReadSignal<u64>,
    current_page: ReadSignal<u32>,
    on_page_change: Callback<u32>,
    empty_message: ReadSignal<String>,
) -> Element {
    rsx! {
        div {
            id: "x-restaurant-list",
            if loading() {
                div {
                    style: "padding: 48px 0;",
                    LoadingIndicator {}
                }
            // An upstream failure renders like an empty result; the page
            // stays usable and the next navigation retries.
            } else if failed() || restaurants.read().is_empty() {
                EmptyListCard { message: empty_message }
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
                    for restaurant in restaurants.read().iter().cloned() {
                        RestaurantCard { key: "{restaurant.id}", restaurant }
                    }
                }
                PaginationControls {
                    current_page,
                    total_items: total_results,
                    page_size: PAGE_SIZE,
                    on_page_change,
                }
            }
        }
    }
}

#[component]
fn EmptyListCard(message: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                padding: 48px 16px;
                color: #8c8c8c;
            ",
            Icon { icon: MdSearch, style: "width: 40px; height: 40px; color: #d9d9d9;" }
            span {
                style: "font-size: 14px;",
                "{message}"
            }
        }
    }
}
