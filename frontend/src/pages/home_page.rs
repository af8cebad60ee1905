//! Landing page: hero search plus a cuisine teaser strip.

use dioxus::prelude::*;

use common::cuisine::display_cuisine_name;

use crate::api::cuisine_api::list_cuisines;
use crate::components::location_card::LocationRequestCard;
use crate::components::search_components::search_bar::SearchBar;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::routes::Route;

const FEATURED_CUISINES: usize = 8;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Quán Ngon" }
        div {
            id: "x-home-page",
            style: "display: flex; flex-direction: column;",
            HeroSection {}
            div {
                style: "max-width: 1200px; margin: 0 auto; padding: 24px; box-sizing: border-box; width: 100%;",
                LocationRequestCard {}
                CuisineStrip {}
            }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        div {
            id: "x-home-hero",
            style: "
                background: linear-gradient(135deg, #fff7e6 0%, #ffd8bf 100%);
                padding: 64px 24px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
                text-align: center;
            ",
            h1 {
                style: "margin: 0; font-size: 40px; color: #262626;",
                "Khám phá "
                span { style: "color: #fa541c;", "Quán Ngon" }
                " quanh bạn"
            }
            p {
                style: "margin: 0 0 12px 0; font-size: 18px; color: #595959;",
                "Tìm kiếm quán ăn theo khu vực, ẩm thực và đánh giá thực khách"
            }
            div {
                style: "width: 100%; max-width: 640px;",
                SearchBar {
                    initial_term: String::new(),
                    placeholder: "Tìm quán ăn, món ăn...",
                }
            }
        }
    }
}

#[component]
fn CuisineStrip() -> Element {
    let cuisines = use_resource(list_cuisines);

    rsx! {
        div {
            id: "x-home-cuisines",
            style: "margin-top: 24px;",
            div {
                style: "display: flex; flex-direction: row; align-items: baseline; justify-content: space-between; margin-bottom: 12px;",
                h2 { style: "margin: 0; font-size: 22px; color: #262626;", "Ẩm thực nổi bật" }
                Link {
                    to: Route::CuisinesPage {},
                    style: "color: #fa541c; font-size: 14px; text-decoration: none;",
                    "Tất cả ẩm thực"
                }
            }
            match &*cuisines.read() {
                None => rsx! { LoadingIndicator {} },
                // The strip is a teaser; a failed fetch just leaves it out.
                Some(Err(_)) => rsx! {},
                Some(Ok(names)) => rsx! {
                    div {
                        style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 10px;",
                        for name in names.iter().take(FEATURED_CUISINES) {
                            CuisinePill { key: "{name}", name: name.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CuisinePill(name: String) -> Element {
    let display = display_cuisine_name(&name);
    rsx! {
        Link {
            to: Route::CuisineDetailPage {
                name: display.clone(),
                query: ListingQueryParam::default(),
            },
            style: "
                background-color: #ffffff;
                border: 1px solid #ffbb96;
                color: #d4380d;
                border-radius: 16px;
                padding: 6px 16px;
                font-size: 14px;
                text-decoration: none;
            ",
            "{display}"
        }
    }
}
