//! Cuisine detail endpoint, addressed by cuisine name.

use common::cuisine::{api_cuisine_name, Cuisine};

use crate::rest_utils::upstream::get_data;

pub async fn cuisine_detail(name: String) -> anyhow::Result<Cuisine> {
    // Route parameters use the display name; the API knows "Unknown".
    let name = api_cuisine_name(&name);
    get_data(&format!("/foodtypes/{name}"), &[]).await
}
