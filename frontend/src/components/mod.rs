pub mod chat_components;
pub mod detail_components;
pub mod error_boundary;
pub mod location_card;
pub mod navbar;
pub mod rating_stars;
pub mod search_components;
pub mod suspend_boundary;
