//! Cuisine API route handlers and module exports.

mod list_cuisines;
pub use list_cuisines::list_cuisines;

mod cuisine_detail;
pub use cuisine_detail::cuisine_detail;
