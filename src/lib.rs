//! Pac-Man movement demo library crate.

pub mod app;
pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod logging;
pub mod map;
pub mod platform;
pub mod systems;
