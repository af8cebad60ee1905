//! Router glue for carrying [`ListingQuery`] in the query string.

use std::fmt;

use dioxus::prelude::*;

use common::listing_query::ListingQuery;

/// Newtype implementing the router's query-segment traits for
/// [`ListingQuery`]. Hydration never fails: malformed or unknown
/// parameters fall back to their defaults inside
/// [`ListingQuery::from_query_str`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQueryParam(pub ListingQuery);

impl From<ListingQuery> for ListingQueryParam {
    fn from(query: ListingQuery) -> Self {
        ListingQueryParam(query)
    }
}

impl FromQuery for ListingQueryParam {
    fn from_query(raw: &str) -> Self {
        ListingQueryParam(ListingQuery::from_query_str(raw))
    }
}

impl fmt::Display for ListingQueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.query_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::listing_query::SortKey;

    #[test]
    fn test_query_segment_round_trip() {
        let param = ListingQueryParam::from(
            ListingQuery::default()
                .with_term("bún chả")
                .with_sort(SortKey::Rating)
                .with_page(2),
        );
        let serialized = param.to_string();
        assert_eq!(ListingQueryParam::from_query(&serialized), param);
    }

    #[test]
    fn test_garbage_query_hydrates_to_defaults() {
        let param = ListingQueryParam::from_query("%%%&&page=zero");
        assert_eq!(param.0, ListingQuery::default());
    }
}
