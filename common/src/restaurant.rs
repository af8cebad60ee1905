//! Wire model for the restaurant API payloads.
//!
//! Field names follow the upstream JSON keys (snake_case); the upstream
//! omits zero-valued fields, so every struct tolerates absent keys.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub rating: f64,
    pub review_count: u64,
    pub city_id: String,
    pub district_id: String,
    pub food_type_name: String,
    /// Present only when the request carried caller coordinates.
    pub distance: Option<f64>,
}

/// Listing payload returned by the proxy: one page of restaurants plus the
/// total match count the pager renders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RestaurantListData {
    pub restaurants: Vec<Restaurant>,
    pub total_count: u64,
}

/// Query parameters for `GET /restaurants`, all optional upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub foodtype: Option<String>,
    pub districts: Vec<String>,
    pub city: Option<String>,
    pub page: u32,
    pub limit: u64,
}

/// One rating category on a restaurant's review breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingCategory {
    Food,
    Service,
    Delivery,
    Price,
    Ambience,
}

impl RatingCategory {
    pub const ALL: &'static [RatingCategory] = &[
        RatingCategory::Food,
        RatingCategory::Service,
        RatingCategory::Delivery,
        RatingCategory::Price,
        RatingCategory::Ambience,
    ];

    /// Capitalized label the reviews endpoint validates against.
    pub fn api_label(&self) -> &'static str {
        match self {
            RatingCategory::Food => "Food",
            RatingCategory::Service => "Service",
            RatingCategory::Delivery => "Delivery",
            RatingCategory::Price => "Price",
            RatingCategory::Ambience => "Ambience",
        }
    }

    pub fn label_vn(&self) -> &'static str {
        match self {
            RatingCategory::Food => "Món ăn",
            RatingCategory::Service => "Dịch vụ",
            RatingCategory::Delivery => "Giao hàng",
            RatingCategory::Price => "Giá cả",
            RatingCategory::Ambience => "Không gian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CategoryRating {
    pub rating: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LabelRatings {
    pub ambience: CategoryRating,
    pub delivery: CategoryRating,
    pub food: CategoryRating,
    pub price: CategoryRating,
    pub service: CategoryRating,
}

impl LabelRatings {
    pub fn get(&self, category: RatingCategory) -> CategoryRating {
        match category {
            RatingCategory::Ambience => self.ambience,
            RatingCategory::Delivery => self.delivery,
            RatingCategory::Food => self.food,
            RatingCategory::Price => self.price,
            RatingCategory::Service => self.service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Review {
    pub rating_id: String,
    pub username: String,
    pub rating: f64,
    pub feedback: String,
    pub review_time: String,
    pub label: String,
    pub rating_label: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub total_reviews: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Dish {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub dishes: Vec<Dish>,
    pub labels: LabelRatings,
    pub platforms: Option<Vec<String>>,
    pub rating_platforms: Option<Vec<f64>>,
    pub reviews: Vec<Review>,
}

impl RestaurantDetails {
    /// Platform names paired with their ratings, dropping a ragged tail if
    /// the upstream arrays disagree in length.
    pub fn platform_ratings(&self) -> Vec<(&str, f64)> {
        match (&self.platforms, &self.rating_platforms) {
            (Some(names), Some(ratings)) => names
                .iter()
                .zip(ratings.iter())
                .map(|(name, rating)| (name.as_str(), *rating))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Qualitative label for an overall rating, mirroring the badge colors the
/// detail header shows.
pub fn rating_quality(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Tuyệt vời"
    } else if rating >= 4.0 {
        "Rất tốt"
    } else if rating >= 3.5 {
        "Tốt"
    } else if rating >= 3.0 {
        "Trung bình"
    } else {
        "Không tốt"
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_tolerates_omitted_fields() {
        // The upstream drops zero-valued fields from its JSON.
        let parsed: Restaurant =
            serde_json::from_str(r#"{"id": 7, "address": "12 Hàng Bông"}"#).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.rating, 0.0);
        assert_eq!(parsed.distance, None);
    }

    #[test]
    fn test_restaurant_distance_present_when_sent() {
        let parsed: Restaurant = serde_json::from_str(
            r#"{"id": 1, "name": "Phở Thìn", "rating": 4.2, "review_count": 120,
                "city_id": "2", "district_id": "13", "food_type_name": "Phở",
                "distance": 1.25}"#,
        )
        .unwrap();
        assert_eq!(parsed.distance, Some(1.25));
        assert_eq!(parsed.review_count, 120);
    }

    #[test]
    fn test_detail_decodes_label_breakdown() {
        let parsed: RestaurantDetails = serde_json::from_str(
            r#"{
                "restaurant": {"id": 3, "name": "Bún Chả 34"},
                "dishes": [{"name": "Bún chả", "price": 50000}],
                "labels": {
                    "ambience": {"rating": 3.9, "count": 12},
                    "delivery": {"rating": 4.1, "count": 4},
                    "food": {"rating": 4.6, "count": 88},
                    "price": {"rating": 4.0, "count": 31},
                    "service": {"rating": 3.7, "count": 20}
                },
                "platforms": ["foody", "befood"],
                "rating_platforms": [4.4, 4.1],
                "reviews": []
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.labels.get(RatingCategory::Food).count, 88);
        assert_eq!(
            parsed.platform_ratings(),
            vec![("foody", 4.4), ("befood", 4.1)]
        );
        assert_eq!(parsed.dishes[0].price, 50000.0);
    }

    #[test]
    fn test_platform_ratings_absent_arrays() {
        let details = RestaurantDetails::default();
        assert!(details.platform_ratings().is_empty());
    }

    #[test]
    fn test_rating_quality_thresholds() {
        assert_eq!(rating_quality(4.5), "Tuyệt vời");
        assert_eq!(rating_quality(4.2), "Rất tốt");
        assert_eq!(rating_quality(3.5), "Tốt");
        assert_eq!(rating_quality(3.0), "Trung bình");
        assert_eq!(rating_quality(2.1), "Không tốt");
    }
}
