//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod restaurant;
pub mod listing_query;
pub mod listing;
pub mod location;
pub mod cuisine;
pub mod chat;
pub mod restaurant_const;
pub mod stale_cache;
