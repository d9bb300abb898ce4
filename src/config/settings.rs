//! Application settings management
//!
//! This module defines the configuration structure for the ShadowKZ game
//! bot. The aggregate is built once at startup, exclusively owns its
//! sections, and is treated as read-only for the rest of the process.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::utils::errors::Result;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub game: GameConfig,
    pub economy: EconomyConfig,
    pub debug: bool,
}

/// Telegram bot connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub owner_id: i64,
    pub payment_token: Option<String>,
}

/// Database location configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Gameplay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    pub min_players: u32,
    pub max_players: u32,
    /// Registration window in seconds
    pub registration_time: u64,
    /// Extra seconds granted by the extend command
    pub extend_time: u64,
    /// Role split per supported player count
    pub role_distribution: BTreeMap<u32, RoleCounts>,
}

/// Role split for one supported player count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleCounts {
    pub peaceful: u32,
    pub shadow: u32,
    pub neutral: u32,
}

impl RoleCounts {
    /// Total number of players this split covers
    pub fn total(&self) -> u32 {
        self.peaceful + self.shadow + self.neutral
    }
}

/// Economy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EconomyConfig {
    pub win_coins: i64,
    pub lose_coins: i64,
    pub win_rating: i64,
    pub lose_rating: i64,
    /// Diamond reward for a completed win streak
    pub streak_diamonds: u32,
    /// Consecutive wins required to trigger the streak reward
    pub streak_required: u32,
    pub exchange_rates: ExchangeRates,
    pub shop_prices: ShopPrices,
}

/// Currency exchange tables (diamonds and coins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExchangeRates {
    pub diamond_to_coin: BTreeMap<u32, u32>,
    pub coin_to_diamond: BTreeMap<u32, u32>,
}

/// Shop price tables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShopPrices {
    /// Diamond quantity -> price in real currency
    pub diamonds: BTreeMap<u32, u32>,
    /// Coin quantity -> price in real currency
    pub coins: BTreeMap<u32, u32>,
    /// Named in-game items with their in-game cost
    pub items: HashMap<String, ItemCost>,
}

/// In-game cost of a shop item; at least one component must be positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemCost {
    pub coins: u32,
    pub diamonds: u32,
}

impl Settings {
    /// Load settings from the process environment, optionally priming it
    /// from a key=value file first
    pub fn load(path: Option<&Path>) -> Result<Self> {
        super::loader::load(path)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                owner_id: 0,
                payment_token: None,
            },
            database: DatabaseConfig::default(),
            game: GameConfig::default(),
            economy: EconomyConfig::default(),
            debug: false,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: defaults::DATABASE_PATH.to_string(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: defaults::MIN_PLAYERS,
            max_players: defaults::MAX_PLAYERS,
            registration_time: defaults::REGISTRATION_TIME,
            extend_time: defaults::EXTEND_TIME,
            role_distribution: defaults::role_distribution(),
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            win_coins: defaults::WIN_COINS,
            lose_coins: defaults::LOSE_COINS,
            win_rating: defaults::WIN_RATING,
            lose_rating: defaults::LOSE_RATING,
            streak_diamonds: defaults::STREAK_DIAMONDS,
            streak_required: defaults::STREAK_REQUIRED,
            exchange_rates: defaults::exchange_rates(),
            shop_prices: defaults::shop_prices(),
        }
    }
}
