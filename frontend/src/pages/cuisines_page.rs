//! Cuisine index: one colored card per food type.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdChevronRight;
use dioxus_free_icons::Icon;

use common::cuisine::display_cuisine_name;

use crate::api::cuisine_api::list_cuisines;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::routes::Route;

/// Rotating backgrounds for the cuisine cards.
const CARD_COLORS: &[&str] = &[
    "#fa541c", "#fa8c16", "#13c2c2", "#52c41a", "#1677ff", "#722ed1", "#eb2f96", "#faad14",
];

#[component]
pub fn CuisinesPage() -> Element {
    rsx! {
        Title { "Quán Ngon - Ẩm thực" }
        div {
            id: "x-cuisines-page",
            style: "max-width: 1200px; margin: 0 auto; padding: 24px; box-sizing: border-box;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 24px; color: #262626;",
                "Tất cả ẩm thực"
            }
            SuspendWrapper {
                CuisineGrid {}
            }
        }
    }
}

#[component]
fn CuisineGrid() -> Element {
    let cuisines = use_resource(list_cuisines).suspend()?.cloned();
    let names = match cuisines {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(names) => names,
    };
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 20px;",
            for (index, name) in names.iter().enumerate() {
                CuisineCard {
                    key: "{name}",
                    name: name.clone(),
                    background: CARD_COLORS[index % CARD_COLORS.len()],
                }
            }
        }
    }
}

#[component]
fn CuisineCard(name: String, background: &'static str) -> Element {
    let display = display_cuisine_name(&name);
    rsx! {
        Link {
            to: Route::CuisineDetailPage {
                name: display.clone(),
                query: ListingQueryParam::default(),
            },
            div {
                class: "x-cuisine-card",
                style: "
                    height: 140px;
                    border-radius: 12px;
                    background-color: {background};
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 16px;
                    box-sizing: border-box;
                ",
                h3 {
                    style: "margin: 0; color: #ffffff; font-size: 20px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{display}"
                }
                span {
                    style: "display: flex; align-items: center; gap: 4px; color: rgba(255,255,255,0.9); font-size: 13px; margin-top: 8px;",
                    "Xem ẩm thực"
                    Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
                }
            }
        }
    }
}
