pub mod chat_api;
pub mod cuisine_api;
pub mod restaurant_api;
