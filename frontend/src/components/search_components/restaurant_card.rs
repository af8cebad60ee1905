//! Result card linking to a restaurant's detail page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::Icon;

use common::location::{district_name, CityKey};
use common::restaurant::Restaurant;

use crate::components::rating_stars::RatingStars;
use crate::routes::Route;

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> Element {
    let restaurant_id = restaurant.id;
    let district = district_name(&restaurant.district_id)
        .unwrap_or(&restaurant.district_id)
        .to_string();
    let city_label = CityKey::from_param(&restaurant.city_id).map(|city| city.label());
    let initial = restaurant.name.chars().next().unwrap_or('?');

    let distance_chip = match restaurant.distance {
        Some(distance) => rsx! {
            span {
                style: "flex-shrink: 0; color: #fa541c; background-color: #fff2e8; border-radius: 4px; padding: 1px 8px; font-size: 12px;",
                "{distance:.1} km"
            }
        },
        None => rsx! {},
    };
    let city_chip = match city_label {
        Some(label) => rsx! { TagChip { text: label.to_string(), color: "#389e0d", background: "#f6ffed" } },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "x-restaurant-card",
            style: "
                display: flex;
                flex-direction: column;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                overflow: hidden;
                cursor: pointer;
            ",
            onclick: move |_| {
                navigator().push(Route::RestaurantDetailPage { restaurant_id });
            },

            // photo placeholder
            div {
                style: "height: 120px; background: linear-gradient(135deg, #ffd666, #fa541c); display: flex; align-items: center; justify-content: center;",
                span {
                    style: "font-size: 44px; font-weight: 700; color: rgba(255, 255, 255, 0.85);",
                    "{initial}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px; padding: 12px;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                    h3 {
                        style: "font-size: 16px; font-weight: 600; color: #262626; margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{restaurant.name}"
                    }
                    {distance_chip}
                }
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    RatingStars { rating: restaurant.rating }
                    span {
                        style: "font-size: 13px; color: #8c8c8c;",
                        "{restaurant.rating:.1} ({restaurant.review_count})"
                    }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    TagChip { text: restaurant.food_type_name.clone(), color: "#d4380d", background: "#fff2e8" }
                    TagChip { text: district, color: "#0958d9", background: "#e6f4ff" }
                    {city_chip}
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px; font-size: 12px; color: #8c8c8c;",
                    Icon { icon: MdLocationOn, style: "width: 14px; height: 14px; flex-shrink: 0;" }
                    span {
                        style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{restaurant.address}"
                    }
                }
            }
        }
    }
}

#[component]
fn TagChip(text: String, color: &'static str, background: &'static str) -> Element {
    rsx! {
        span {
            style: "color: {color}; background-color: {background}; border-radius: 4px; padding: 1px 8px; font-size: 12px;",
            "{text}"
        }
    }
}
