//! Cuisine (food type) name list endpoint.

use crate::rest_utils::upstream::get_data;

pub async fn list_cuisines() -> anyhow::Result<Vec<String>> {
    get_data("/foodtypes", &[]).await
}
