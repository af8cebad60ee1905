//! Free-text restaurant search endpoint, shared by the suggestion popup and
//! the full search page (they differ only in `limit`).

use common::restaurant::Restaurant;

use crate::rest_utils::upstream::get_data;

pub async fn search_restaurants(query: String, limit: u64) -> anyhow::Result<Vec<Restaurant>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let params = [
        ("query", trimmed.to_string()),
        ("limit", limit.to_string()),
    ];
    get_data("/restaurants/search", &params).await
}
