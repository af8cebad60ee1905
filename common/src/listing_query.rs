//! URL-synchronized query state for the listing and search surfaces.
//!
//! `ListingQuery` is the single authoritative holder of the free-text term
//! and the structured filters. Every mutation is a pure transition producing
//! a complete new value; the frontend writes that value back to the URL in
//! one replace-navigation, so no setter ever merges against a stale copy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::{district_in_scope, CityKey};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Preserve the order the backend returned (relevance / its own ranking).
    #[default]
    Relevance,
    Rating,
    ReviewCount,
    Distance,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Rating => "rating",
            SortKey::ReviewCount => "reviewCount",
            SortKey::Distance => "distance",
        }
    }

    pub fn from_param(raw: &str) -> Option<SortKey> {
        match raw {
            "relevance" => Some(SortKey::Relevance),
            "rating" => Some(SortKey::Rating),
            "reviewCount" => Some(SortKey::ReviewCount),
            "distance" => Some(SortKey::Distance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    /// Committed free-text term; empty means no active search.
    pub q: String,
    /// Selected district ids, deduplicated, in insertion order.
    pub districts: Vec<String>,
    /// City scope; `None` means all cities.
    pub city: Option<CityKey>,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        ListingQuery {
            q: String::new(),
            districts: Vec::new(),
            city: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Hydrates state from a raw URL query string. Malformed or unrecognized
    /// values fall back to their defaults; district ids outside the hydrated
    /// city scope are dropped so stale selections never persist.
    pub fn from_query_str(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).unwrap_or_default();
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        let q = first("q").map(|v| v.trim().to_string()).unwrap_or_default();
        let city = first("city").and_then(CityKey::from_param);
        let sort = first("sort").and_then(SortKey::from_param).unwrap_or_default();
        let page = first("page")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        let mut districts: Vec<String> = Vec::new();
        if let Some(joined) = first("districts") {
            for id in joined.split(',') {
                let id = id.trim();
                if !id.is_empty()
                    && district_in_scope(city, id)
                    && !districts.iter().any(|d| d.as_str() == id)
                {
                    districts.push(id.to_string());
                }
            }
        }

        ListingQuery { q, districts, city, sort, page }
    }

    /// Canonical URL serialization; parameters holding their default value
    /// are omitted so equal states always produce equal strings.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if !self.districts.is_empty() {
            pairs.push(("districts", self.districts.join(",")));
        }
        if let Some(city) = self.city {
            pairs.push(("city", city.as_param().to_string()));
        }
        if self.sort != SortKey::default() {
            pairs.push(("sort", self.sort.as_param().to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    /// Commits a submitted term: trims it and returns to page 1.
    #[must_use]
    pub fn with_term(&self, term: &str) -> Self {
        ListingQuery {
            q: term.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Replaces the district selection (deduplicated, insertion order kept).
    /// An unchanged selection is a no-op; a changed one returns to page 1.
    #[must_use]
    pub fn with_districts(&self, ids: Vec<String>) -> Self {
        let mut districts: Vec<String> = Vec::new();
        for id in ids {
            if !districts.contains(&id) {
                districts.push(id);
            }
        }
        if districts == self.districts {
            return self.clone();
        }
        ListingQuery {
            districts,
            page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn toggle_district(&self, id: &str) -> Self {
        let mut districts = self.districts.clone();
        match districts.iter().position(|d| d == id) {
            Some(index) => {
                districts.remove(index);
            }
            None => districts.push(id.to_string()),
        }
        ListingQuery {
            districts,
            page: 1,
            ..self.clone()
        }
    }

    /// Changes the city scope. A genuine change clears the district selection
    /// (district ids are city-scoped) and returns to page 1; re-selecting the
    /// active city leaves everything untouched.
    #[must_use]
    pub fn with_city(&self, city: Option<CityKey>) -> Self {
        if city == self.city {
            return self.clone();
        }
        ListingQuery {
            city,
            districts: Vec::new(),
            page: 1,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort(&self, sort: SortKey) -> Self {
        if sort == self.sort {
            return self.clone();
        }
        ListingQuery {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    /// Clears districts, city and sort back to defaults, keeping only the
    /// free-text term, and returns to page 1.
    #[must_use]
    pub fn reset_filters(&self) -> Self {
        ListingQuery {
            q: self.q.clone(),
            ..ListingQuery::default()
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        ListingQuery {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Effective sort key given coordinate availability: distance degrades
    /// to rating when no coordinates are known.
    pub fn sort_for(&self, has_coordinates: bool) -> SortKey {
        if self.sort == SortKey::Distance && !has_coordinates {
            SortKey::Rating
        } else {
            self.sort
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.districts.is_empty() || self.city.is_some() || self.sort != SortKey::default()
    }
}

impl fmt::Display for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrate_empty_string_yields_defaults() {
        let query = ListingQuery::from_query_str("");
        assert_eq!(query, ListingQuery::default());
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_hydrate_reads_all_recognized_params() {
        let query =
            ListingQuery::from_query_str("q=pho&districts=13,20&city=HN&sort=rating&page=3");
        assert_eq!(query.q, "pho");
        assert_eq!(query.districts, vec!["13", "20"]);
        assert_eq!(query.city, Some(CityKey::Hanoi));
        assert_eq!(query.sort, SortKey::Rating);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_hydrate_malformed_values_fall_back_to_defaults() {
        let query = ListingQuery::from_query_str("page=abc&sort=ascending&city=Paris");
        assert_eq!(query.page, 1);
        assert_eq!(query.sort, SortKey::Relevance);
        assert_eq!(query.city, None);

        let query = ListingQuery::from_query_str("page=0");
        assert_eq!(query.page, 1);

        let query = ListingQuery::from_query_str("page=-2");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_hydrate_drops_districts_outside_city_scope() {
        // "32" is a Hồ Chí Minh id; under a Hanoi scope it must not survive.
        let query = ListingQuery::from_query_str("city=HN&districts=32,20");
        assert_eq!(query.districts, vec!["20"]);

        // Without a city, ids from either city pass, unknown ids do not.
        let query = ListingQuery::from_query_str("districts=32,20,999");
        assert_eq!(query.districts, vec!["32", "20"]);
    }

    #[test]
    fn test_hydrate_deduplicates_districts() {
        let query = ListingQuery::from_query_str("districts=13,13,20,13");
        assert_eq!(query.districts, vec!["13", "20"]);
    }

    #[test]
    fn test_hydrate_decodes_percent_encoded_terms() {
        let query = ListingQuery::from_query_str("q=b%C3%BAn%20ch%E1%BA%A3");
        assert_eq!(query.q, "bún chả");
        let query = ListingQuery::from_query_str("q=bun+cha");
        assert_eq!(query.q, "bun cha");
    }

    #[test]
    fn test_query_string_omits_defaults() {
        assert_eq!(ListingQuery::default().query_string(), "");
        let query = ListingQuery::default().with_page(1);
        assert_eq!(query.query_string(), "");
    }

    #[test]
    fn test_query_string_round_trip() {
        let query = ListingQuery::default()
            .with_term("bún chả")
            .with_city(Some(CityKey::Hanoi))
            .with_districts(vec!["13".to_string(), "20".to_string()])
            .with_sort(SortKey::ReviewCount)
            .with_page(2);
        let rehydrated = ListingQuery::from_query_str(&query.query_string());
        assert_eq!(rehydrated, query);
    }

    #[test]
    fn test_city_change_clears_districts() {
        let on_hcm = ListingQuery::from_query_str("city=HCM&districts=32");
        assert_eq!(on_hcm.districts, vec!["32"]);

        let on_hanoi = on_hcm.with_city(Some(CityKey::Hanoi));
        assert!(on_hanoi.districts.is_empty());
        assert!(!on_hanoi.query_string().contains("districts"));
    }

    #[test]
    fn test_reselecting_active_city_keeps_districts() {
        let query = ListingQuery::from_query_str("city=HCM&districts=32,28");
        let same = query.with_city(Some(CityKey::Hcm));
        assert_eq!(same.districts, vec!["32", "28"]);
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let base = ListingQuery::from_query_str("q=pho&page=4");
        assert_eq!(base.page, 4);

        assert_eq!(base.with_term("bun").page, 1);
        assert_eq!(base.with_districts(vec!["13".to_string()]).page, 1);
        assert_eq!(base.toggle_district("13").page, 1);
        assert_eq!(base.with_city(Some(CityKey::Hcm)).page, 1);
        assert_eq!(base.with_sort(SortKey::Rating).page, 1);
        assert_eq!(base.reset_filters().page, 1);
    }

    #[test]
    fn test_page_change_touches_nothing_else() {
        let base = ListingQuery::from_query_str("q=pho&districts=13&city=HN&sort=rating");
        let paged = base.with_page(5);
        assert_eq!(paged.page, 5);
        assert_eq!(paged.q, base.q);
        assert_eq!(paged.districts, base.districts);
        assert_eq!(paged.city, base.city);
        assert_eq!(paged.sort, base.sort);

        assert_eq!(base.with_page(0).page, 1);
    }

    #[test]
    fn test_toggle_district_adds_and_removes() {
        let base = ListingQuery::default();
        let with_one = base.toggle_district("13");
        assert_eq!(with_one.districts, vec!["13"]);
        let removed = with_one.toggle_district("13");
        assert!(removed.districts.is_empty());
    }

    #[test]
    fn test_reset_filters_preserves_term_only() {
        let query = ListingQuery::from_query_str("q=pho&districts=13&city=HN&sort=rating&page=3");
        let reset = query.reset_filters();
        assert_eq!(reset.q, "pho");
        assert_eq!(reset, ListingQuery::default().with_term("pho"));
    }

    #[test]
    fn test_submitted_term_is_trimmed() {
        let query = ListingQuery::default().with_term("  pho  ");
        assert_eq!(query.q, "pho");
    }

    #[test]
    fn test_distance_sort_degrades_without_coordinates() {
        let query = ListingQuery::default().with_sort(SortKey::Distance);
        assert_eq!(query.sort_for(true), SortKey::Distance);
        assert_eq!(query.sort_for(false), SortKey::Rating);
        assert_eq!(query.with_sort(SortKey::ReviewCount).sort_for(false), SortKey::ReviewCount);
    }
}
