//! The presentation layer: configuration file, terminal rendering, desktop
//! notifications and keyboard input.

pub mod config;
pub mod console;
pub mod outbound;
pub mod repository;
