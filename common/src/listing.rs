//! Client-side composition of a fetched result set: district/city filtering,
//! stable sorting, and fixed-size pagination.

use std::cmp::Ordering;

use crate::listing_query::{ListingQuery, SortKey};
use crate::location::CityKey;
use crate::restaurant::Restaurant;


/// Retains the restaurants whose district is selected; an empty selection
/// retains everything.
pub fn filter_by_districts(restaurants: &[Restaurant], districts: &[String]) -> Vec<Restaurant> {
    if districts.is_empty() {
        return restaurants.to_vec();
    }
    restaurants
        .iter()
        .filter(|r| districts.iter().any(|d| *d == r.district_id))
        .cloned()
        .collect()
}

pub fn filter_by_city(restaurants: &[Restaurant], city: Option<CityKey>) -> Vec<Restaurant> {
    match city {
        None => restaurants.to_vec(),
        Some(city) => restaurants
            .iter()
            .filter(|r| r.city_id == city.api_id())
            .cloned()
            .collect(),
    }
}

/// Stable sort by the selected key; the caller's slice is never mutated.
/// Restaurants without a known distance sort after every restaurant with
/// one, so unknown never reads as "closest".
pub fn sort_by_key(restaurants: &[Restaurant], sort: SortKey) -> Vec<Restaurant> {
    let mut sorted = restaurants.to_vec();
    match sort {
        SortKey::Relevance => {}
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::ReviewCount => sorted.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortKey::Distance => sorted.sort_by(|a, b| match (a.distance, b.distance) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
    sorted
}

/// Filter-then-sort for a client-composed surface. The caller passes the
/// effective sort (already degraded when coordinates are unavailable).
pub fn compose(restaurants: &[Restaurant], query: &ListingQuery, sort: SortKey) -> Vec<Restaurant> {
    let filtered = filter_by_districts(restaurants, &query.districts);
    let filtered = filter_by_city(&filtered, query.city);
    sort_by_key(&filtered, sort)
}

/// The 1-based page's slice, clamped to the list bounds; pages beyond the
/// end are empty rather than an error.
pub fn page_slice<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(total_items: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    (total_items as f64 / page_size as f64).ceil() as u32
}


#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: u64, district: &str, rating: f64, reviews: u64, distance: Option<f64>) -> Restaurant {
        Restaurant {
            id,
            name: format!("Quán {id}"),
            rating,
            review_count: reviews,
            city_id: "2".to_string(),
            district_id: district.to_string(),
            distance,
            ..Restaurant::default()
        }
    }

    fn ids(restaurants: &[Restaurant]) -> Vec<u64> {
        restaurants.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_district_filter_retains_exact_members() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, None),
            restaurant(2, "20", 3.0, 5, None),
            restaurant(3, "13", 5.0, 2, None),
            restaurant(4, "16", 4.5, 9, None),
        ];
        let selected = vec!["13".to_string(), "16".to_string()];
        let filtered = filter_by_districts(&list, &selected);
        assert_eq!(ids(&filtered), vec![1, 3, 4]);
        assert!(filtered.iter().all(|r| selected.contains(&r.district_id)));
    }

    #[test]
    fn test_empty_district_selection_retains_all() {
        let list = vec![restaurant(1, "13", 4.0, 10, None), restaurant(2, "20", 3.0, 5, None)];
        assert_eq!(ids(&filter_by_districts(&list, &[])), vec![1, 2]);
    }

    #[test]
    fn test_city_filter() {
        let mut other_city = restaurant(9, "32", 4.9, 400, None);
        other_city.city_id = "1".to_string();
        let list = vec![restaurant(1, "13", 4.0, 10, None), other_city];
        assert_eq!(ids(&filter_by_city(&list, Some(CityKey::Hanoi))), vec![1]);
        assert_eq!(ids(&filter_by_city(&list, Some(CityKey::Hcm))), vec![9]);
        assert_eq!(ids(&filter_by_city(&list, None)), vec![1, 9]);
    }

    #[test]
    fn test_rating_sort_descending_and_stable() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, None),
            restaurant(2, "13", 4.5, 5, None),
            restaurant(3, "13", 4.0, 99, None),
            restaurant(4, "13", 3.0, 7, None),
        ];
        let sorted = sort_by_key(&list, SortKey::Rating);
        // Equal ratings keep their input order (1 before 3).
        assert_eq!(ids(&sorted), vec![2, 1, 3, 4]);
        // The input is untouched.
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_review_count_sort_descending() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, None),
            restaurant(2, "13", 4.5, 120, None),
            restaurant(3, "13", 4.9, 10, None),
        ];
        assert_eq!(ids(&sort_by_key(&list, SortKey::ReviewCount)), vec![2, 1, 3]);
    }

    #[test]
    fn test_distance_sort_puts_missing_last() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, None),
            restaurant(2, "13", 4.0, 10, Some(2.5)),
            restaurant(3, "13", 4.0, 10, Some(0.4)),
            restaurant(4, "13", 4.0, 10, None),
        ];
        assert_eq!(ids(&sort_by_key(&list, SortKey::Distance)), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_relevance_preserves_backend_order() {
        let list = vec![
            restaurant(5, "13", 1.0, 0, None),
            restaurant(1, "13", 5.0, 9, None),
            restaurant(3, "13", 3.0, 4, None),
        ];
        assert_eq!(ids(&sort_by_key(&list, SortKey::Relevance)), vec![5, 1, 3]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, Some(1.0)),
            restaurant(2, "13", 4.0, 50, None),
            restaurant(3, "13", 4.8, 10, Some(0.2)),
            restaurant(4, "13", 2.0, 3, Some(9.0)),
        ];
        for sort in [SortKey::Relevance, SortKey::Rating, SortKey::ReviewCount, SortKey::Distance] {
            let once = sort_by_key(&list, sort);
            let twice = sort_by_key(&once, sort);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn test_compose_filters_then_sorts() {
        let list = vec![
            restaurant(1, "13", 4.0, 10, None),
            restaurant(2, "20", 5.0, 99, None),
            restaurant(3, "13", 4.8, 3, None),
        ];
        let query = ListingQuery::from_query_str("districts=13&sort=rating");
        let composed = compose(&list, &query, query.sort_for(false));
        assert_eq!(ids(&composed), vec![3, 1]);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (1..=45).collect();
        assert_eq!(page_slice(&items, 1, 20), (1..=20).collect::<Vec<_>>().as_slice());
        assert_eq!(page_slice(&items, 2, 20), (21..=40).collect::<Vec<_>>().as_slice());
        assert_eq!(page_slice(&items, 3, 20), (41..=45).collect::<Vec<_>>().as_slice());
        assert!(page_slice(&items, 4, 20).is_empty());
        assert!(page_slice::<u32>(&[], 1, 20).is_empty());
        // Page 0 is treated as page 1.
        assert_eq!(page_slice(&items, 0, 20), page_slice(&items, 1, 20));
    }

    #[test]
    fn test_pages_concatenate_to_original_list() {
        let items: Vec<u32> = (1..=45).collect();
        let pages = total_pages(items.len(), 20);
        assert_eq!(pages, 3);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(page_slice(&items, page, 20));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
    }
}
