//! Menu endpoint for one restaurant.

use common::restaurant::Dish;

use crate::rest_utils::upstream::get_data;

pub async fn restaurant_menu(id: u64) -> anyhow::Result<Vec<Dish>> {
    get_data(&format!("/restaurants/{id}/menu"), &[]).await
}
