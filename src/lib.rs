//! ShadowKZ Telegram Bot
//!
//! Configuration subsystem for the ShadowKZ social deduction game bot.
//! This library builds an immutable, validated settings aggregate from
//! the process environment and built-in tiered defaults; the bot
//! transport, game engine, and persistence layer consume it at startup.

#![allow(non_snake_case)]

pub mod config;
pub mod utils;

// Re-export commonly used types
pub use config::{load, validate_settings, Settings};
pub use utils::errors::{Result, ShadowKzError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
