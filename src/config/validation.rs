//! Configuration validation
//!
//! Cross-field and domain-range checks over an already-built settings
//! aggregate, independent of how it was built. The first violated rule
//! wins and each violation carries a human-readable reason. Validation
//! is pure: running it twice on the same settings gives the same result.

use super::defaults;
use super::settings::{BotConfig, DatabaseConfig, EconomyConfig, GameConfig, Settings};
use crate::utils::errors::{Result, ShadowKzError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_game_config(&settings.game)?;
    validate_database_config(&settings.database)?;
    validate_economy_config(&settings.economy)?;

    Ok(())
}

/// Validate bot connection configuration
fn validate_bot_config(config: &BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(ShadowKzError::MissingRequiredValue(
            "BOT_TOKEN is not set".to_string(),
        ));
    }

    if config.owner_id == 0 {
        return Err(ShadowKzError::MissingRequiredValue(
            "OWNER_ID is not set".to_string(),
        ));
    }

    Ok(())
}

/// Validate gameplay configuration
fn validate_game_config(config: &GameConfig) -> Result<()> {
    if config.min_players < defaults::MIN_PLAYERS {
        return Err(ShadowKzError::OutOfRangeValue(format!(
            "min_players must be at least {}, got {}",
            defaults::MIN_PLAYERS,
            config.min_players
        )));
    }

    if config.max_players > defaults::MAX_PLAYERS {
        return Err(ShadowKzError::OutOfRangeValue(format!(
            "max_players must be at most {}, got {}",
            defaults::MAX_PLAYERS,
            config.max_players
        )));
    }

    if config.min_players > config.max_players {
        return Err(ShadowKzError::OutOfRangeValue(format!(
            "min_players {} exceeds max_players {}",
            config.min_players, config.max_players
        )));
    }

    if config.registration_time == 0 {
        return Err(ShadowKzError::OutOfRangeValue(
            "registration_time must be positive".to_string(),
        ));
    }

    if config.extend_time == 0 {
        return Err(ShadowKzError::OutOfRangeValue(
            "extend_time must be positive".to_string(),
        ));
    }

    for (players, roles) in &config.role_distribution {
        if roles.total() != *players {
            return Err(ShadowKzError::OutOfRangeValue(format!(
                "role split for {} players sums to {}",
                players,
                roles.total()
            )));
        }
    }

    Ok(())
}

/// Validate database location configuration
fn validate_database_config(config: &DatabaseConfig) -> Result<()> {
    if config.path.is_empty() {
        return Err(ShadowKzError::MissingRequiredValue(
            "DATABASE_PATH is empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate economy configuration
fn validate_economy_config(config: &EconomyConfig) -> Result<()> {
    if config.streak_required == 0 {
        return Err(ShadowKzError::OutOfRangeValue(
            "streak_required must be positive".to_string(),
        ));
    }

    for (name, cost) in &config.shop_prices.items {
        if cost.coins == 0 && cost.diamonds == 0 {
            return Err(ShadowKzError::OutOfRangeValue(format!(
                "shop item '{}' costs nothing",
                name
            )));
        }
    }

    Ok(())
}
