pub mod chat_page;
pub mod cuisine_detail_page;
pub mod cuisines_page;
pub mod home_page;
pub mod restaurant_detail_page;
pub mod restaurants_page;
pub mod search_page;
