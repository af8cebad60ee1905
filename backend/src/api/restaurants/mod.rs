//! Restaurant API route handlers and module exports.

mod list_restaurants;
pub use list_restaurants::list_restaurants;

mod search_restaurants;
pub use search_restaurants::search_restaurants;

mod restaurant_detail;
pub use restaurant_detail::restaurant_detail;

mod restaurant_reviews;
pub use restaurant_reviews::restaurant_reviews;

mod restaurant_menu;
pub use restaurant_menu::restaurant_menu;
