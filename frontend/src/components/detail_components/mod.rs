pub mod menu_list;
pub mod platform_ratings;
pub mod rating_highlight;
pub mod review_list;
