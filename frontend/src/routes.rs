use dioxus::prelude::*;

use common::listing_query::ListingQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_query::ListingQueryParam;
use crate::pages::chat_page::ChatPage;
use crate::pages::cuisine_detail_page::CuisineDetailPage;
use crate::pages::cuisines_page::CuisinesPage;
use crate::pages::home_page::HomePage;
use crate::pages::restaurant_detail_page::RestaurantDetailPage;
use crate::pages::restaurants_page::RestaurantsPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/restaurants?:..query")]
    RestaurantsPage { query: ListingQueryParam },


    #[route("/search?:..query")]
    SearchPage { query: ListingQueryParam },


    #[route("/restaurant/:restaurant_id")]
    RestaurantDetailPage { restaurant_id: u64 },


    #[route("/cuisines")]
    CuisinesPage {},

    #[route("/cuisine/:name?:..query")]
    CuisineDetailPage { name: String, query: ListingQueryParam },

    #[route("/ask")]
    ChatPage {},

}

impl Route {
    pub fn restaurants_from_query(q: ListingQuery) -> Self {
        Self::RestaurantsPage {
            query: ListingQueryParam::from(q),
        }
    }

    pub fn search_from_query(q: ListingQuery) -> Self {
        Self::SearchPage {
            query: ListingQueryParam::from(q),
        }
    }

    pub fn cuisine_from_query(name: String, q: ListingQuery) -> Self {
        Self::CuisineDetailPage {
            name,
            query: ListingQueryParam::from(q),
        }
    }

    /// Fresh search for a submitted term. Filters from a previous search do
    /// not carry over, matching the address bar after a plain `/search?q=`.
    pub fn search_for_term(term: &str) -> Self {
        Self::search_from_query(ListingQuery::default().with_term(term))
    }
}
