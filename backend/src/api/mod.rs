pub mod chat;
pub mod cuisines;
pub mod restaurants;
