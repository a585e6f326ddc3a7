//! Application services layer.

pub mod context;
pub mod error;
pub mod render;
pub mod repos;
