//! Built-in default tables
//!
//! Tiered role distributions and the economy tables ship with the code
//! as pure data. Section builders fall back to these when no override is
//! supplied; each call constructs a fresh table, so no instance ever
//! shares a mutable default with another.

use std::collections::{BTreeMap, HashMap};

use super::settings::{ExchangeRates, ItemCost, RoleCounts, ShopPrices};

/// Smallest supported lobby
pub const MIN_PLAYERS: u32 = 9;
/// Largest supported lobby
pub const MAX_PLAYERS: u32 = 30;
/// Registration window in seconds
pub const REGISTRATION_TIME: u64 = 60;
/// Extra seconds granted by the extend command
pub const EXTEND_TIME: u64 = 30;

/// Default database file, next to the working directory
pub const DATABASE_PATH: &str = "shadowkz.db";

pub const WIN_COINS: i64 = 100;
pub const LOSE_COINS: i64 = -50;
pub const WIN_RATING: i64 = 10;
pub const LOSE_RATING: i64 = -5;
pub const STREAK_DIAMONDS: u32 = 5;
pub const STREAK_REQUIRED: u32 = 5;

/// Role split for each supported player count; every split sums exactly
/// to its player count
pub fn role_distribution() -> BTreeMap<u32, RoleCounts> {
    BTreeMap::from([
        (9, RoleCounts { peaceful: 4, shadow: 4, neutral: 1 }),
        (12, RoleCounts { peaceful: 6, shadow: 4, neutral: 2 }),
        (15, RoleCounts { peaceful: 8, shadow: 5, neutral: 2 }),
        (20, RoleCounts { peaceful: 11, shadow: 6, neutral: 3 }),
        (25, RoleCounts { peaceful: 14, shadow: 7, neutral: 4 }),
        (30, RoleCounts { peaceful: 17, shadow: 9, neutral: 4 }),
    ])
}

/// Diamond <-> coin exchange tables
pub fn exchange_rates() -> ExchangeRates {
    ExchangeRates {
        diamond_to_coin: BTreeMap::from([(1, 100), (2, 200), (5, 1000)]),
        coin_to_diamond: BTreeMap::from([(100, 1), (200, 2), (1000, 5)]),
    }
}

/// Shop price tables: currency bundles in real currency, named items in
/// in-game currency
pub fn shop_prices() -> ShopPrices {
    ShopPrices {
        diamonds: BTreeMap::from([(1, 250), (2, 500), (5, 750)]),
        coins: BTreeMap::from([(200, 500), (500, 750), (1000, 1000)]),
        items: HashMap::from([
            ("fake_document".to_string(), ItemCost { coins: 200, diamonds: 0 }),
            ("shield".to_string(), ItemCost { coins: 500, diamonds: 0 }),
            ("role_peaceful".to_string(), ItemCost { coins: 0, diamonds: 5 }),
            ("role_neutral".to_string(), ItemCost { coins: 0, diamonds: 10 }),
            ("role_shadow".to_string(), ItemCost { coins: 0, diamonds: 20 }),
        ]),
    }
}
