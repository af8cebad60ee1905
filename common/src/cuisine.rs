//! Cuisine (food type) wire model.

use serde::{Deserialize, Serialize};

use crate::restaurant::Restaurant;


/// The upstream files unclassified restaurants under this literal name.
pub const UNCLASSIFIED_API_NAME: &str = "Unknown";
pub const UNCLASSIFIED_DISPLAY_NAME: &str = "Món khác";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Cuisine {
    pub id: String,
    pub name: String,
    pub restaurants: Vec<Restaurant>,
    #[serde(alias = "totalRestaurants")]
    pub total_restaurants: u64,
}

/// Maps the upstream's "Unknown" bucket onto its display name.
pub fn display_cuisine_name(name: &str) -> String {
    if name == UNCLASSIFIED_API_NAME {
        UNCLASSIFIED_DISPLAY_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Inverse of [`display_cuisine_name`], applied to route parameters before
/// they are sent upstream.
pub fn api_cuisine_name(display: &str) -> String {
    if display == UNCLASSIFIED_DISPLAY_NAME {
        UNCLASSIFIED_API_NAME.to_string()
    } else {
        display.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_name_round_trip() {
        assert_eq!(display_cuisine_name("Unknown"), "Món khác");
        assert_eq!(api_cuisine_name("Món khác"), "Unknown");
        assert_eq!(display_cuisine_name("Phở"), "Phở");
        assert_eq!(api_cuisine_name("Phở"), "Phở");
    }
}
