//! Per-category rating breakdown for the detail page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdStore;
use dioxus_free_icons::icons::md_editor_icons::MdAttachMoney;
use dioxus_free_icons::icons::md_maps_icons::{MdLocalShipping, MdRestaurant};
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::Icon;

use common::restaurant::{CategoryRating, LabelRatings, RatingCategory};

use crate::components::rating_stars::RatingStars;

#[component]
pub fn RatingHighlight(
    labels: LabelRatings,
    selected: ReadSignal<RatingCategory>,
    on_select: Callback<RatingCategory>,
) -> Element {
    // Categories nobody reviewed carry a zero that would drag the mean down.
    let rated: Vec<f64> = RatingCategory::ALL
        .iter()
        .map(|category| labels.get(*category))
        .filter(|rating| rating.count > 0)
        .map(|rating| rating.rating)
        .collect();
    let average = if rated.is_empty() {
        0.0
    } else {
        rated.iter().sum::<f64>() / rated.len() as f64
    };

    rsx! {
        div {
            id: "x-rating-highlight",
            style: "
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                padding: 16px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 14px;",
                span {
                    style: "font-size: 40px; font-weight: 700; color: #fa541c;",
                    "{average:.1}"
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 2px;",
                    RatingStars { rating: average, size: 20 }
                    span {
                        style: "font-size: 13px; color: #8c8c8c;",
                        "Điểm trung bình"
                    }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 10px;",
                for category in RatingCategory::ALL.iter().copied() {
                    CategoryCard {
                        key: "{category.api_label()}",
                        category,
                        rating: labels.get(category),
                        selected,
                        on_select,
                    }
                }
            }
        }
    }
}

/// Clicking a card selects that category's reviews below.
#[component]
fn CategoryCard(
    category: RatingCategory,
    rating: CategoryRating,
    selected: ReadSignal<RatingCategory>,
    on_select: Callback<RatingCategory>,
) -> Element {
    let border = if selected() == category { "#fa541c" } else { "#f0f0f0" };
    let percent = (rating.rating / 5.0 * 100.0).clamp(0.0, 100.0);
    rsx! {
        div {
            class: "x-category-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background-color: #ffffff;
                border: 1px solid {border};
                border-radius: 8px;
                padding: 12px;
                cursor: pointer;
            ",
            onclick: move |_| on_select(category),
            div {
                style: "display: flex; align-items: center; gap: 6px; color: #fa541c;",
                CategoryIcon { category }
                span {
                    style: "font-size: 13px; font-weight: 600; color: #434343;",
                    "{category.label_vn()}"
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                span {
                    style: "font-size: 18px; font-weight: 700; color: #262626;",
                    "{rating.rating:.1}"
                }
                RatingStars { rating: rating.rating, size: 12 }
            }
            div {
                style: "height: 6px; background-color: #f5f5f5; border-radius: 3px; overflow: hidden;",
                div {
                    style: "height: 100%; width: {percent:.0}%; background-color: #fa541c;",
                }
            }
            span {
                style: "font-size: 12px; color: #8c8c8c;",
                "{rating.count} đánh giá"
            }
        }
    }
}

#[component]
fn CategoryIcon(category: RatingCategory) -> Element {
    match category {
        RatingCategory::Food => rsx! { Icon { icon: MdRestaurant, style: "width: 18px; height: 18px;" } },
        RatingCategory::Service => rsx! { Icon { icon: MdPerson, style: "width: 18px; height: 18px;" } },
        RatingCategory::Delivery => rsx! { Icon { icon: MdLocalShipping, style: "width: 18px; height: 18px;" } },
        RatingCategory::Price => rsx! { Icon { icon: MdAttachMoney, style: "width: 18px; height: 18px;" } },
        RatingCategory::Ambience => rsx! { Icon { icon: MdStore, style: "width: 18px; height: 18px;" } },
    }
}
