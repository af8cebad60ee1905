use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::geolocation::provide_location_state;
use crate::data_definitions::search_cache::QueryCaches;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(QueryCaches::new);
    provide_location_state();

    rsx! {
        // TODO: replace google fonts with local fonts
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
