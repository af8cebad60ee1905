//! Axum routes mounted next to the server functions.

pub mod health;
