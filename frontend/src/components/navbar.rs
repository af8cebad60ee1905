//! Top navigation bar and page frame.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::search_components::search_bar::SearchBar;
use crate::routes::Route;
use common::listing_query::ListingQuery;

use dioxus_free_icons::icons::md_maps_icons::MdRestaurant;
use dioxus_free_icons::Icon;


/// Shared navbar component. Every routed page renders inside its outlet.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-app-frame",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            header {
                id:"x-top-navbar",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 56px;
                    padding: 0 24px;
                    background-color: #ffffff;
                    border-bottom: 1px solid #f0f0f0;
                    flex-shrink: 0;
                ",

                NavbarBrand{},
                NavbarLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarSearch{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow-y: auto; background-color: #fafafa;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarBrand() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            span {
                style: "display:flex; align-items:center; gap: 8px; color: #fa541c; font-size: 20px; font-weight: 700;",
                Icon { icon: MdRestaurant, style: "width: 26px; height: 26px;" }
                "Quán Ngon"
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        nav {
            style: "
                display:flex;
                flex-direction: row;
                gap: 4px;
                align-items: center;
            ",
            NavTextLink { to: Route::HomePage { }, label: "Trang chủ" }
            NavTextLink { to: Route::restaurants_from_query(ListingQuery::default()), label: "Nhà hàng" }
            NavTextLink { to: Route::CuisinesPage { }, label: "Ẩm thực" }
            NavTextLink { to: Route::ChatPage { }, label: "Chatbot" }
        }
    }
}

#[component]
fn NavTextLink(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-nav-link",
            active_class: "x-nav-link-active",
            "{label}"
        }
    }
}

/// Compact search bar for every page except the home page, which carries
/// the hero-sized one itself.
#[component]
fn NavbarSearch() -> Element {
    let route = use_route::<Route>();
    if matches!(route, Route::HomePage {}) {
        return rsx! {};
    }
    let initial_term = match &route {
        Route::SearchPage { query } => query.0.q.clone(),
        _ => String::new(),
    };
    rsx! {
        div {
            style: "width: 340px;",
            SearchBar {
                initial_term,
                placeholder: "Tìm quán ăn, món ăn...",
            }
        }
    }
}
