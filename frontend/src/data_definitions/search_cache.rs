//! App-wide result caches with a freshness window.

use dioxus::prelude::*;

use common::restaurant::{Restaurant, RestaurantListData};
use common::restaurant_const::SEARCH_STALE_MS;
use common::stale_cache::StaleCache;

/// Wall-clock epoch milliseconds. Resources run both in the browser and
/// during server rendering, so the clock has to exist on either side.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Caches provided once at the app root, so navigating between pages reuses
/// fresh-enough results instead of refetching them.
#[derive(Clone, Copy)]
pub struct QueryCaches {
    /// Paged listings, keyed by the serialized upstream parameters.
    pub listings: Signal<StaleCache<RestaurantListData>>,
    /// Term searches, keyed by [`search_cache_key`]. Serves both the
    /// suggestion popup and the full search page.
    pub searches: Signal<StaleCache<Vec<Restaurant>>>,
}

impl QueryCaches {
    pub fn new() -> Self {
        QueryCaches {
            listings: Signal::new(StaleCache::new(SEARCH_STALE_MS)),
            searches: Signal::new(StaleCache::new(SEARCH_STALE_MS)),
        }
    }
}

/// The limit is part of the key: the popup's 5-row fetch must never be
/// mistaken for the search page's full result set.
pub fn search_cache_key(term: &str, limit: u64) -> String {
    format!("{limit}:{term}")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_separate_popup_and_full_search() {
        assert_ne!(search_cache_key("pho", 5), search_cache_key("pho", 60));
        assert_eq!(search_cache_key("pho", 60), search_cache_key("pho", 60));
    }

    #[test]
    fn test_now_ms_is_monotonic_enough_for_ttl_checks() {
        let before = now_ms();
        let after = now_ms();
        assert!(after >= before);
        assert!(before > 0.0);
    }
}
