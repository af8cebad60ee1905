//! Paginated reviews for one rating category of a restaurant.

use common::restaurant::{RatingCategory, ReviewPage};

use crate::rest_utils::upstream::get_data;

pub async fn restaurant_reviews(
    id: u64,
    label: RatingCategory,
    page: u32,
) -> anyhow::Result<ReviewPage> {
    let params = [
        ("label", label.api_label().to_string()),
        ("page", page.max(1).to_string()),
        ("count", "true".to_string()),
    ];
    get_data(&format!("/restaurants/{id}/reviews"), &params).await
}
