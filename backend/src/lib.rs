//! Server-side half of the app. Everything here proxies the restaurant API
//! and the chat assistant so the browser only ever talks to our own origin.

pub mod api;
pub mod rest_utils;
pub mod server_extra;
