//! Label-filtered, paged review list for the detail page.

use dioxus::prelude::*;

use common::restaurant::{RatingCategory, Review};
use common::restaurant_const::REVIEWS_PAGE_SIZE;

use crate::api::restaurant_api::restaurant_reviews;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::rating_stars::RatingStars;
use crate::components::search_components::pagination_controls::PaginationControls;
use crate::components::suspend_boundary::LoadingIndicator;

#[component]
pub fn ReviewList(
    restaurant_id: ReadSignal<u64>,
    restaurant_name: ReadSignal<String>,
    label: ReadSignal<RatingCategory>,
    page: ReadSignal<u32>,
    on_page_change: Callback<u32>,
) -> Element {
    let mut reviews = use_resource(move || {
        let id = restaurant_id();
        let label = label();
        let page = page();
        async move { restaurant_reviews(id, label, page).await }
    });
    use_effect(move || {
        let _ = (restaurant_id(), label(), page());
        reviews.clear();
        reviews.restart();
    });

    let heading = use_memo(move || {
        format!(
            "Khách hàng nói gì về {} ở {}",
            label().label_vn().to_lowercase(),
            restaurant_name()
        )
    });

    rsx! {
        div {
            id: "x-review-list",
            style: "display: flex; flex-direction: column; gap: 12px;",
            h3 {
                style: "font-size: 15px; font-weight: 600; color: #262626; margin: 0;",
                "{heading}"
            }
            match reviews.read().as_ref() {
                None => rsx! { LoadingIndicator {} },
                Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
                Some(Ok(review_page)) if review_page.reviews.is_empty() => rsx! {
                    div {
                        style: "padding: 24px; text-align: center; color: #8c8c8c; font-size: 14px;",
                        "Chưa có đánh giá nào"
                    }
                },
                Some(Ok(review_page)) => rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        for review in review_page.reviews.clone() {
                            ReviewRow { key: "{review.rating_id}", review }
                        }
                    }
                    PaginationControls {
                        current_page: page,
                        total_items: review_page.total_reviews,
                        page_size: REVIEWS_PAGE_SIZE as usize,
                        on_page_change,
                    }
                },
            }
        }
    }
}

#[component]
fn ReviewRow(review: Review) -> Element {
    let initial = review.username.chars().next().unwrap_or('?');
    // review_time arrives as a timestamp string; the date part is enough.
    let date = review
        .review_time
        .split(['T', ' '])
        .next()
        .unwrap_or("")
        .to_string();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                background-color: #ffffff;
                border: 1px solid #f0f0f0;
                border-radius: 8px;
                padding: 12px;
            ",
            div {
                style: "
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    background-color: #fff2e8;
                    color: #fa541c;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    flex-shrink: 0;
                ",
                "{initial}"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex-grow: 1; min-width: 0;",
                div {
                    style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                    span {
                        style: "font-size: 14px; font-weight: 600; color: #262626;",
                        "{review.username}"
                    }
                    RatingStars { rating: review.rating, size: 12 }
                    span {
                        style: "font-size: 12px; color: #bfbfbf;",
                        "{date}"
                    }
                }
                p {
                    style: "font-size: 13px; color: #434343; margin: 0; white-space: pre-wrap;",
                    "{review.feedback}"
                }
            }
        }
    }
}
