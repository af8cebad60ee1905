//! Search results page. One bounded fetch per committed term; filters, sort
//! and pagination rearrange that same result set without another request.

use dioxus::prelude::*;

use common::listing::{compose, page_slice};
use common::listing_query::ListingQuery;
use common::restaurant_const::{MAX_SEARCH_RESULTS, PAGE_SIZE};

use crate::api::restaurant_api::search_restaurants_cached;
use crate::components::search_components::restaurant_filter::RestaurantFilter;
use crate::components::search_components::restaurant_list::RestaurantList;
use crate::data_definitions::geolocation::LocationState;
use crate::data_definitions::search_cache::QueryCaches;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::routes::Route;

#[component]
pub fn SearchPage(query: ListingQueryParam) -> Element {
    rsx! {
        Title { "Quán Ngon - Tìm kiếm" }
        SearchResults { query: query.0.clone() }
    }
}

#[component]
fn SearchResults(query: ReadSignal<ListingQuery>) -> Element {
    let caches = use_context::<QueryCaches>();
    let location = use_context::<LocationState>();
    let has_coordinates = use_memo(move || location.coordinates.read().is_some());

    let term = use_memo(move || query.read().q.clone());
    let mut results = use_resource(move || {
        let term = term.read().clone();
        search_restaurants_cached(term, MAX_SEARCH_RESULTS, caches.searches)
    });
    // when the committed term changes, we need to restart the search resource
    use_effect(move || {
        let _ = term.read();
        results.clear();
        results.restart();
    });

    let composed = use_memo(move || match &*results.read() {
        Some(Ok(list)) => {
            let q = query.read();
            compose(list, &q, q.sort_for(has_coordinates()))
        }
        _ => Vec::new(),
    });
    let page_items = use_memo(move || {
        let items = composed.read();
        page_slice(&items, query.read().page, PAGE_SIZE).to_vec()
    });
    // Count after filtering, so the pager and the headline agree with what
    // is actually on screen.
    let total_results = use_memo(move || composed.read().len() as u64);
    let loading = use_memo(move || results.read().is_none());
    let failed = use_memo(move || matches!(&*results.read(), Some(Err(_))));
    let current_page = use_memo(move || query.read().page.max(1));
    let empty_message = use_memo(move || {
        if term.read().is_empty() {
            "Sử dụng thanh tìm kiếm ở đầu trang để tìm kiếm".to_string()
        } else {
            "Không tìm thấy quán ăn phù hợp".to_string()
        }
    });

    // Bring the headline back into view when the pager moves.
    let mut page_top = use_signal(|| None::<Event<MountedData>>);
    use_effect(move || {
        let _ = current_page();
        if let Some(top) = page_top.read().as_ref() {
            let _x = top.scroll_to_with_options(ScrollToOptions {
                behavior: ScrollBehavior::Smooth,
                vertical: ScrollLogicalPosition::Start,
                horizontal: ScrollLogicalPosition::Nearest,
            });
        }
    });

    rsx! {
        div {
            id: "x-search-page",
            style: "max-width: 1200px; margin: 0 auto; padding: 24px; box-sizing: border-box;",
            onmounted: move |event| page_top.set(Some(event)),
            div {
                style: "margin-bottom: 16px;",
                h2 {
                    style: "margin: 0 0 4px 0; font-size: 24px; color: #262626;",
                    "Search Results"
                }
                if !loading() && total_results() > 0 {
                    p {
                        style: "margin: 0; color: #8c8c8c; font-size: 14px;",
                        "Found {total_results()} results for \"{term}\""
                    }
                }
            }
            RestaurantFilter {
                query,
                has_coordinates: has_coordinates.into(),
                on_change: move |next: ListingQuery| {
                    navigator().replace(Route::search_from_query(next));
                },
            }
            RestaurantList {
                loading: loading.into(),
                failed: failed.into(),
                restaurants: page_items.into(),
                total_results: total_results.into(),
                current_page: current_page.into(),
                on_page_change: move |page: u32| {
                    let next = query.peek().with_page(page);
                    navigator().push(Route::search_from_query(next));
                },
                empty_message: empty_message.into(),
            }
        }
    }
}
