//! Paginated restaurant listing endpoint.

use common::restaurant::{ListParams, Restaurant, RestaurantListData};
use serde::Deserialize;

use crate::rest_utils::upstream::get_body;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Vec<Restaurant>,
    #[serde(default)]
    total_count: Option<u64>,
}

fn list_query_pairs(params: &ListParams) -> Vec<(&'static str, String)> {
    let mut pairs: Vec<(&'static str, String)> = Vec::new();
    if let Some(lat) = params.lat {
        pairs.push(("lat", lat.to_string()));
    }
    if let Some(lng) = params.lng {
        pairs.push(("lng", lng.to_string()));
    }
    if let Some(foodtype) = &params.foodtype {
        pairs.push(("foodtype", foodtype.clone()));
    }
    if !params.districts.is_empty() {
        pairs.push(("district", params.districts.join(",")));
    }
    if let Some(city) = &params.city {
        pairs.push(("city", city.clone()));
    }
    pairs.push(("page", params.page.max(1).to_string()));
    if params.limit > 0 {
        pairs.push(("limit", params.limit.to_string()));
    }
    pairs
}

pub async fn list_restaurants(params: ListParams) -> anyhow::Result<RestaurantListData> {
    let response: ListResponse = get_body("/restaurants", &list_query_pairs(&params)).await?;
    // Older API builds do not send a count; the page length is the best floor.
    let total_count = response.total_count.unwrap_or(response.data.len() as u64);
    Ok(RestaurantListData {
        restaurants: response.data,
        total_count,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_absent_params() {
        let params = ListParams {
            page: 2,
            limit: 30,
            ..ListParams::default()
        };
        let pairs = list_query_pairs(&params);
        assert_eq!(
            pairs,
            vec![("page", "2".to_string()), ("limit", "30".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_join_districts_and_clamp_page() {
        let params = ListParams {
            lat: Some(21.0278),
            lng: Some(105.8342),
            districts: vec!["13".to_string(), "20".to_string()],
            city: Some("2".to_string()),
            page: 0,
            limit: 30,
            ..ListParams::default()
        };
        let pairs = list_query_pairs(&params);
        assert!(pairs.contains(&("district", "13,20".to_string())));
        assert!(pairs.contains(&("city", "2".to_string())));
        assert!(pairs.contains(&("page", "1".to_string())));
    }

    #[test]
    fn test_list_response_without_count_falls_back_to_len() {
        let response: ListResponse =
            serde_json::from_str(r#"{"message": "Success", "data": [{"id": 1}, {"id": 2}]}"#)
                .unwrap();
        assert_eq!(response.total_count, None);
        assert_eq!(response.data.len(), 2);
    }
}
