//! Configuration management module
//!
//! This module builds the settings aggregate from the process
//! environment (optionally primed from a key=value file) and the
//! built-in tiered defaults, then validates it before the rest of the
//! bot starts.

pub mod defaults;
pub mod env;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use loader::{load, load_from};
pub use settings::{
    BotConfig, DatabaseConfig, EconomyConfig, ExchangeRates, GameConfig, ItemCost, RoleCounts,
    Settings, ShopPrices,
};
pub use validation::validate_settings;
