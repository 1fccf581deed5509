//! HTTP API endpoints, one module per surface area.

pub mod audio;
pub mod health;
pub mod lyrics;
pub mod pages;
