//! Browse listing over the whole catalogue, paged by the upstream service.

use dioxus::prelude::*;

use common::listing::sort_by_key;
use common::listing_query::ListingQuery;
use common::restaurant::ListParams;
use common::restaurant_const::PAGE_SIZE;

use crate::api::restaurant_api::list_restaurants_cached;
use crate::components::location_card::LocationRequestCard;
use crate::components::search_components::restaurant_filter::RestaurantFilter;
use crate::components::search_components::restaurant_list::RestaurantList;
use crate::data_definitions::geolocation::LocationState;
use crate::data_definitions::search_cache::QueryCaches;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::routes::Route;

#[component]
pub fn RestaurantsPage(query: ListingQueryParam) -> Element {
    let location = use_context::<LocationState>();
    let heading = if location.coordinates.read().is_some() {
        "Quán ăn gần bạn"
    } else {
        "Tất cả quán ăn"
    };

    rsx! {
        Title { "Quán Ngon - Nhà hàng" }
        BrowseListing {
            query: query.0.clone(),
            foodtype: None::<String>,
            heading: heading.to_string(),
            empty_message: "Không tìm thấy quán ăn phù hợp".to_string(),
            show_location_prompt: true,
            on_filter_change: move |next: ListingQuery| {
                navigator().replace(Route::restaurants_from_query(next));
            },
            on_page_change: move |next: ListingQuery| {
                navigator().push(Route::restaurants_from_query(next));
            },
        }
    }
}

/// Server-paged listing with the filter panel on top. Filter edits replace
/// the current history entry; page moves push one, so Back walks pages.
#[component]
pub fn BrowseListing(
    query: ReadSignal<ListingQuery>,
    foodtype: ReadSignal<Option<String>>,
    heading: ReadSignal<String>,
    empty_message: ReadSignal<String>,
    show_location_prompt: bool,
    on_filter_change: Callback<ListingQuery>,
    on_page_change: Callback<ListingQuery>,
) -> Element {
    let caches = use_context::<QueryCaches>();
    let location = use_context::<LocationState>();
    let has_coordinates = use_memo(move || location.coordinates.read().is_some());

    // Everything the upstream call depends on, folded into one memo, so the
    // resource restarts exactly when a fetch-relevant input changes. Sort is
    // absent on purpose: it is applied client-side below.
    let fetch_params = use_memo(move || {
        let q = query.read().clone();
        let position = *location.coordinates.read();
        ListParams {
            lat: position.map(|p| p.latitude),
            lng: position.map(|p| p.longitude),
            foodtype: foodtype.read().clone(),
            districts: q.districts.clone(),
            city: q.city.map(|c| c.api_id().to_string()),
            page: q.page,
            limit: PAGE_SIZE as u64,
        }
    });

    let mut listing = use_resource(move || {
        let params = fetch_params.read().clone();
        list_restaurants_cached(params, caches.listings)
    });
    // when the fetch parameters change, we need to restart the listing resource
    use_effect(move || {
        let _ = fetch_params.read();
        listing.clear();
        listing.restart();
    });

    let sorted_page = use_memo(move || match &*listing.read() {
        Some(Ok(data)) => sort_by_key(&data.restaurants, query.read().sort_for(has_coordinates())),
        _ => Vec::new(),
    });
    let loading = use_memo(move || listing.read().is_none());
    let failed = use_memo(move || matches!(&*listing.read(), Some(Err(_))));
    let total_results = use_memo(move || match &*listing.read() {
        Some(Ok(data)) => data.total_count,
        _ => 0,
    });
    let current_page = use_memo(move || query.read().page.max(1));

    // Bring the heading back into view when the pager moves.
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
            id: "x-browse-listing",
            style: "max-width: 1200px; margin: 0 auto; padding: 24px; box-sizing: border-box;",
            onmounted: move |event| page_top.set(Some(event)),
            h2 {
                style: "margin: 0 0 16px 0; font-size: 24px; color: #262626;",
                "{heading}"
            }
            if show_location_prompt {
                LocationRequestCard {}
            }
            RestaurantFilter {
                query,
                has_coordinates: has_coordinates.into(),
                on_change: move |next: ListingQuery| on_filter_change(next),
            }
            RestaurantList {
                loading: loading.into(),
                failed: failed.into(),
                restaurants: sorted_page.into(),
                total_results: total_results.into(),
                current_page: current_page.into(),
                on_page_change: move |page: u32| {
                    let next = query.peek().with_page(page);
                    on_page_change(next);
                },
                empty_message,
            }
        }
    }
}
