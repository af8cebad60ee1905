//! Tunable limits shared between frontend and backend.

/// Restaurants shown per page on listing and search surfaces.
pub const PAGE_SIZE: usize = 20;

/// Upper bound on restaurants fetched for one full search.
pub const MAX_SEARCH_RESULTS: u64 = 60;

/// Size of the search-as-you-type suggestion popup.
pub const SUGGESTION_LIMIT: u64 = 5;

/// Quiet period after the last keystroke before a suggestion lookup fires.
pub const SUGGESTION_DEBOUNCE_MS: u32 = 300;

/// Reviews delivered per page by the reviews endpoint.
pub const REVIEWS_PAGE_SIZE: u64 = 10;

/// Freshness window for cached search result sets.
pub const SEARCH_STALE_MS: f64 = 5.0 * 60.0 * 1000.0;

/// Freshness window for cached geolocation coordinates.
pub const LOCATION_STALE_MS: f64 = 30.0 * 60.0 * 1000.0;
