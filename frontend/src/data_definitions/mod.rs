pub mod chat_thread;
pub mod geolocation;
pub mod search_cache;
pub mod url_query;
