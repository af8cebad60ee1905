//! Single-restaurant detail endpoint.

use common::restaurant::RestaurantDetails;

use crate::rest_utils::upstream::get_data;

pub async fn restaurant_detail(id: u64) -> anyhow::Result<RestaurantDetails> {
    get_data(&format!("/restaurants/{id}"), &[]).await
}
