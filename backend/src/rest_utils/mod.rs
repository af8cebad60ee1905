//! Utilities shared by the REST proxy handlers.

pub mod upstream;
