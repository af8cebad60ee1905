//! Restaurant detail: info header, category rating cards, review/menu tabs
//! and per-platform scores.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;
use dioxus_free_icons::Icon;

use common::location::{district_name, CityKey};
use common::restaurant::{rating_quality, RatingCategory};

use crate::api::restaurant_api::{is_not_found, restaurant_detail, restaurant_menu};
use crate::components::detail_components::menu_list::MenuList;
use crate::components::detail_components::platform_ratings::PlatformRatings;
use crate::components::detail_components::rating_highlight::RatingHighlight;
use crate::components::detail_components::review_list::ReviewList;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::rating_stars::RatingStars;
use crate::components::suspend_boundary::LoadingIndicator;

/// Badge color for each step of the qualitative rating ladder.
fn quality_color(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "#52c41a"
    } else if rating >= 4.0 {
        "#a0d911"
    } else if rating >= 3.5 {
        "#1677ff"
    } else if rating >= 3.0 {
        "#fa8c16"
    } else {
        "#f5222d"
    }
}

#[derive(Clone, Copy, PartialEq)]
enum DetailTab {
    Reviews,
    Menu,
}

#[component]
pub fn RestaurantDetailPage(restaurant_id: u64) -> Element {
    rsx! {
        Title { "Quán Ngon - Chi tiết quán ăn" }
        RestaurantDetailRoot { restaurant_id }
    }
}

#[component]
fn RestaurantDetailRoot(restaurant_id: ReadSignal<u64>) -> Element {
    let mut bundle = use_resource(move || {
        let id = restaurant_id();
        async move {
            let (detail, menu) = futures_util::join!(restaurant_detail(id), restaurant_menu(id));
            // A missing menu is not worth failing the whole page over.
            detail.map(|detail| (detail, menu.unwrap_or_default()))
        }
    });
    // when the restaurant id changes, we need to restart the bundle resource
    use_effect(move || {
        let _ = restaurant_id.read();
        bundle.clear();
        bundle.restart();
    });

    let mut selected_label = use_signal(|| RatingCategory::Food);
    let mut review_page = use_signal(|| 1u32);
    let mut active_tab = use_signal(|| DetailTab::Reviews);

    match &*bundle.read() {
        None => rsx! {
            div { style: "padding: 64px 0;", LoadingIndicator {} }
        },
        Some(Err(e)) if is_not_found(e) => rsx! {
            MissingRestaurantCard {}
        },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay { error_txt: format!("{:#?}", e) }
        },
        Some(Ok((detail, menu))) => {
            let restaurant = &detail.restaurant;
            let quality = rating_quality(restaurant.rating);
            let quality_tint = quality_color(restaurant.rating);
            let initial = restaurant.name.chars().next().unwrap_or('?');
            let city_chip = match CityKey::from_param(&restaurant.city_id) {
                Some(city) => rsx! {
                    span {
                        style: "background-color: #fafafa; border: 1px solid #d9d9d9; color: #595959; border-radius: 4px; padding: 2px 8px; font-size: 13px;",
                        "{city.label()}"
                    }
                },
                None => rsx! {},
            };
            let district_chip = match district_name(&restaurant.district_id) {
                Some(district) => rsx! {
                    span {
                        style: "background-color: #fafafa; border: 1px solid #d9d9d9; color: #595959; border-radius: 4px; padding: 2px 8px; font-size: 13px;",
                        "{district}"
                    }
                },
                None => rsx! {},
            };
            let platform_pairs: Vec<(String, f64)> = detail
                .platform_ratings()
                .into_iter()
                .map(|(name, rating)| (name.to_string(), rating))
                .collect();
            let has_platforms = platform_pairs.iter().any(|(_, rating)| *rating > 0.0);

            rsx! {
                div {
                    id: "x-restaurant-detail",
                    // Hero banner standing in for the restaurant photo.
                    div {
                        style: "
                            height: 220px;
                            background: linear-gradient(135deg, #ffd666 0%, #fa541c 100%);
                            display: flex;
                            align-items: center;
                            justify-content: center;
                        ",
                        span {
                            style: "font-size: 96px; font-weight: 700; color: rgba(255, 255, 255, 0.85);",
                            "{initial}"
                        }
                    }
                    div {
                        style: "max-width: 1200px; margin: 0 auto; padding: 0 24px 40px 24px; box-sizing: border-box;",
                        div {
                            style: "
                                position: relative;
                                margin-top: -48px;
                                background-color: #ffffff;
                                border: 1px solid #f0f0f0;
                                border-radius: 12px;
                                padding: 24px;
                                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                            ",
                            h2 { style: "margin: 0 0 8px 0; font-size: 28px; color: #262626;", "{restaurant.name}" }
                            div {
                                style: "display: flex; flex-direction: row; align-items: center; gap: 8px; margin-bottom: 8px;",
                                RatingStars { rating: restaurant.rating }
                                span {
                                    style: "color: #595959; font-size: 14px;",
                                    {format!("{:.1} ({} reviews)", restaurant.rating, restaurant.review_count)}
                                }
                                span {
                                    style: "
                                        display: flex;
                                        align-items: center;
                                        gap: 4px;
                                        background-color: {quality_tint};
                                        color: #ffffff;
                                        border-radius: 4px;
                                        padding: 2px 8px;
                                        font-size: 13px;
                                    ",
                                    Icon { icon: MdStar, style: "width: 14px; height: 14px;" }
                                    "{quality}"
                                }
                            }
                            div {
                                style: "display: flex; flex-direction: row; align-items: center; gap: 6px; color: #595959; font-size: 14px; margin-bottom: 12px;",
                                Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                                span { "{restaurant.address}" }
                            }
                            div {
                                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                                span {
                                    style: "background-color: #fff2e8; color: #d4380d; border-radius: 4px; padding: 2px 8px; font-size: 13px;",
                                    "{restaurant.food_type_name}"
                                }
                                {city_chip}
                                {district_chip}
                            }
                        }

                        div {
                            style: "margin-top: 16px;",
                            RatingHighlight {
                                labels: detail.labels,
                                selected: selected_label,
                                on_select: move |label: RatingCategory| {
                                    selected_label.set(label);
                                    // Each category pages independently from 1.
                                    review_page.set(1);
                                },
                            }
                        }

                        div {
                            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px; align-items: flex-start; margin-top: 16px;",
                            div {
                                style: "
                                    flex: 2;
                                    min-width: 320px;
                                    background-color: #ffffff;
                                    border: 1px solid #f0f0f0;
                                    border-radius: 12px;
                                    padding: 24px;
                                ",
                                div {
                                    style: "display: flex; flex-direction: row; gap: 24px; border-bottom: 1px solid #f0f0f0; margin-bottom: 16px;",
                                    TabButton {
                                        label: "Đánh giá",
                                        active: active_tab() == DetailTab::Reviews,
                                        onclick: move |_: ()| active_tab.set(DetailTab::Reviews),
                                    }
                                    TabButton {
                                        label: "Menu",
                                        active: active_tab() == DetailTab::Menu,
                                        onclick: move |_: ()| active_tab.set(DetailTab::Menu),
                                    }
                                }
                                match active_tab() {
                                    DetailTab::Reviews => rsx! {
                                        ReviewList {
                                            restaurant_id,
                                            restaurant_name: restaurant.name.clone(),
                                            label: selected_label,
                                            page: review_page,
                                            on_page_change: move |page: u32| review_page.set(page),
                                        }
                                    },
                                    DetailTab::Menu => rsx! {
                                        MenuList { dishes: menu.clone() }
                                    },
                                }
                            }
                            if has_platforms {
                                div {
                                    style: "flex: 1; min-width: 260px;",
                                    PlatformRatings { ratings: platform_pairs.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(label: String, active: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let text_color = if active() { "#fa541c" } else { "#595959" };
    let underline = if active() { "2px solid #fa541c" } else { "2px solid transparent" };
    rsx! {
        button {
            style: "
                border: none;
                background: none;
                cursor: pointer;
                font-size: 15px;
                padding: 8px 0;
                color: {text_color};
                border-bottom: {underline};
            ",
            onclick: move |_| onclick(()),
            "{label}"
        }
    }
}

#[component]
fn MissingRestaurantCard() -> Element {
    rsx! {
        div {
            style: "
                max-width: 560px;
                margin: 64px auto;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 12px;
                padding: 32px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
            ",
            h3 { style: "margin: 0; color: #262626;", "Không tìm thấy quán ăn" }
            button {
                style: "
                    background-color: #fa541c;
                    color: #ffffff;
                    border: none;
                    border-radius: 6px;
                    padding: 8px 20px;
                    font-size: 14px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    navigator().go_back();
                },
                "Quay lại"
            }
        }
    }
}
