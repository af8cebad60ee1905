pub mod pagination_controls;
pub mod restaurant_card;
pub mod restaurant_filter;
pub mod restaurant_list;
pub mod search_bar;
pub mod suggestion_popup;
