//! Listing scoped to one cuisine, reusing the browse machinery.

use dioxus::prelude::*;

use common::cuisine::{api_cuisine_name, display_cuisine_name};
use common::listing_query::ListingQuery;

use crate::api::cuisine_api::cuisine_detail;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::pages::restaurants_page::BrowseListing;
use crate::routes::Route;

#[component]
pub fn CuisineDetailPage(name: String, query: ListingQueryParam) -> Element {
    let display = display_cuisine_name(&name);
    rsx! {
        Title { "Quán Ngon - {display}" }
        CuisineListing { name, query: query.0.clone() }
    }
}

#[component]
fn CuisineListing(name: ReadSignal<String>, query: ReadSignal<ListingQuery>) -> Element {
    // Fetched only for the restaurant count in the heading; the listing
    // itself goes through the regular browse fetch so filters apply.
    let mut cuisine = use_resource(move || {
        let name = name.read().clone();
        cuisine_detail(name)
    });
    use_effect(move || {
        let _ = name.read();
        cuisine.clear();
        cuisine.restart();
    });

    let heading = use_memo(move || {
        let display = display_cuisine_name(&name.read());
        match &*cuisine.read() {
            Some(Ok(detail)) => format!("{display} ({} quán)", detail.total_restaurants),
            _ => display,
        }
    });
    let foodtype = use_memo(move || Some(api_cuisine_name(&name.read())));
    let empty_message =
        use_memo(move || format!("Không có quán ăn nào có {}", display_cuisine_name(&name.read())));

    rsx! {
        BrowseListing {
            query,
            foodtype: foodtype.into(),
            heading: heading.into(),
            empty_message: empty_message.into(),
            show_location_prompt: false,
            on_filter_change: move |next: ListingQuery| {
                navigator().replace(Route::cuisine_from_query(name.peek().clone(), next));
            },
            on_page_change: move |next: ListingQuery| {
                navigator().push(Route::cuisine_from_query(name.peek().clone(), next));
            },
        }
    }
}
