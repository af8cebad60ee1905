//! Client API calls for restaurant endpoints.

use common::restaurant::{
    Dish, ListParams, RatingCategory, Restaurant, RestaurantDetails, RestaurantListData,
    ReviewPage,
};
use common::stale_cache::StaleCache;
use dioxus::prelude::*;

use crate::data_definitions::search_cache::{now_ms, search_cache_key};




#[server]
pub async fn list_restaurants(params: ListParams) -> Result<RestaurantListData, ServerFnError> {
    let x = backend::api::restaurants::list_restaurants(params).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_restaurants(query: String, limit: u64) -> Result<Vec<Restaurant>, ServerFnError> {
    let x = backend::api::restaurants::search_restaurants(query, limit).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn restaurant_detail(restaurant_id: u64) -> Result<RestaurantDetails, ServerFnError> {
    let x = backend::api::restaurants::restaurant_detail(restaurant_id).await;
    x.map_err(|e| {
        let code = if e.downcast_ref::<backend::rest_utils::upstream::NotFound>().is_some() { 404 } else { 500 };
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

#[server]
pub async fn restaurant_reviews(restaurant_id: u64, label: RatingCategory, page: u32) -> Result<ReviewPage, ServerFnError> {
    let x = backend::api::restaurants::restaurant_reviews(restaurant_id, label, page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn restaurant_menu(restaurant_id: u64) -> Result<Vec<Dish>, ServerFnError> {
    let x = backend::api::restaurants::restaurant_menu(restaurant_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// True for the server error a missing restaurant or cuisine maps to.
pub fn is_not_found(error: &ServerFnError) -> bool {
    matches!(error, ServerFnError::ServerError { code: 404, .. })
}

/// Paged listing fetch behind the app-wide freshness cache. Only successful
/// responses are stored, so a failed page is retried on the next visit.
pub async fn list_restaurants_cached(
    params: ListParams,
    mut cache: Signal<StaleCache<RestaurantListData>>,
) -> Result<RestaurantListData, ServerFnError> {
    let key = serde_json::to_string(&params).unwrap_or_default();
    if let Some(hit) = cache.peek().get(&key, now_ms()) {
        return Ok(hit);
    }
    let fresh = list_restaurants(params).await?;
    cache.write().insert(key, fresh.clone(), now_ms());
    Ok(fresh)
}

/// Term search behind the same cache; a blank term resolves to an empty
/// result without touching the network.
pub async fn search_restaurants_cached(
    query: String,
    limit: u64,
    mut cache: Signal<StaleCache<Vec<Restaurant>>>,
) -> Result<Vec<Restaurant>, ServerFnError> {
    let query = query.trim().to_string();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    let key = search_cache_key(&query, limit);
    if let Some(hit) = cache.peek().get(&key, now_ms()) {
        return Ok(hit);
    }
    let fresh = search_restaurants(query, limit).await?;
    cache.write().insert(key, fresh.clone(), now_ms());
    Ok(fresh)
}
