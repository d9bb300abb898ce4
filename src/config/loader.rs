//! Configuration loader
//!
//! Primes the environment from an optional file, runs each section
//! builder exactly once, and assembles the settings aggregate. The
//! loader adds no validity checks of its own; those live in
//! [`super::validation`]. The one build-time rejection is a present but
//! non-numeric `OWNER_ID`, which cannot be represented in the aggregate.

use std::path::Path;

use tracing::debug;

use super::env::{prime_from_file, EnvSource, ProcessEnv};
use super::settings::{BotConfig, DatabaseConfig, EconomyConfig, GameConfig, Settings};
use crate::utils::errors::{Result, ShadowKzError};

/// Load settings from the process environment
///
/// When `path` is given, that file's key=value pairs are merged in
/// first; variables already present in the environment win.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        prime_from_file(path)?;
    }
    load_from(&ProcessEnv)
}

/// Build settings from an arbitrary environment source
pub fn load_from(env: &dyn EnvSource) -> Result<Settings> {
    let settings = Settings {
        bot: build_bot_config(env)?,
        database: build_database_config(env),
        game: GameConfig::default(),
        economy: EconomyConfig::default(),
        debug: build_debug_flag(env),
    };
    debug!(
        owner_id = settings.bot.owner_id,
        database = %settings.database.path,
        debug = settings.debug,
        "Settings assembled"
    );
    Ok(settings)
}

/// Build the bot connection section
///
/// Missing values stay at their empty defaults for the validator to
/// reject; only an unparsable `OWNER_ID` fails here.
fn build_bot_config(env: &dyn EnvSource) -> Result<BotConfig> {
    let token = env.get_or("BOT_TOKEN", "");
    let owner_id = match env.get("OWNER_ID") {
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            ShadowKzError::MissingRequiredValue(format!(
                "OWNER_ID must be an integer, got '{}'",
                raw
            ))
        })?,
        None => 0,
    };

    Ok(BotConfig {
        token,
        owner_id,
        payment_token: env.get("PAYMENT_TOKEN"),
    })
}

/// Build the database location section
fn build_database_config(env: &dyn EnvSource) -> DatabaseConfig {
    DatabaseConfig {
        path: env.get_or("DATABASE_PATH", super::defaults::DATABASE_PATH),
    }
}

/// Read the debug flag; anything but a case-insensitive "true" is false
fn build_debug_flag(env: &dyn EnvSource) -> bool {
    env.get("DEBUG")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::MapEnv;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn minimal_env() -> MapEnv {
        MapEnv::new().set("BOT_TOKEN", "abc123").set("OWNER_ID", "555")
    }

    #[test]
    fn test_builds_bot_section_from_env() {
        let settings = load_from(&minimal_env()).unwrap();

        assert_eq!(settings.bot.token, "abc123");
        assert_eq!(settings.bot.owner_id, 555);
        assert_eq!(settings.bot.payment_token, None);
    }

    #[test]
    fn test_payment_token_is_optional() {
        let env = minimal_env().set("PAYMENT_TOKEN", "pay:42");
        let settings = load_from(&env).unwrap();

        assert_eq!(settings.bot.payment_token, Some("pay:42".to_string()));
    }

    #[test]
    fn test_missing_required_values_default_for_the_validator() {
        let settings = load_from(&MapEnv::new()).unwrap();

        assert_eq!(settings.bot.token, "");
        assert_eq!(settings.bot.owner_id, 0);
        assert_matches!(
            settings.validate(),
            Err(ShadowKzError::MissingRequiredValue(_))
        );
    }

    #[test]
    fn test_non_numeric_owner_id_rejected_at_build() {
        let env = MapEnv::new().set("BOT_TOKEN", "abc123").set("OWNER_ID", "owner");

        let err = load_from(&env).unwrap_err();
        assert_matches!(err, ShadowKzError::MissingRequiredValue(reason) => {
            assert!(reason.contains("OWNER_ID"));
        });
    }

    #[test]
    fn test_empty_owner_id_rejected_at_build() {
        let env = MapEnv::new().set("BOT_TOKEN", "abc123").set("OWNER_ID", "");

        assert_matches!(
            load_from(&env),
            Err(ShadowKzError::MissingRequiredValue(_))
        );
    }

    #[test]
    fn test_database_path_default_and_override() {
        let settings = load_from(&minimal_env()).unwrap();
        assert_eq!(settings.database.path, "shadowkz.db");

        let env = minimal_env().set("DATABASE_PATH", "custom.db");
        let settings = load_from(&env).unwrap();
        assert_eq!(settings.database.path, "custom.db");
    }

    #[test]
    fn test_debug_flag_parsing() {
        assert!(!load_from(&minimal_env()).unwrap().debug);
        assert!(load_from(&minimal_env().set("DEBUG", "true")).unwrap().debug);
        assert!(load_from(&minimal_env().set("DEBUG", "True")).unwrap().debug);
        assert!(!load_from(&minimal_env().set("DEBUG", "yes")).unwrap().debug);
        assert!(!load_from(&minimal_env().set("DEBUG", "false")).unwrap().debug);
    }

    #[test]
    fn test_game_and_economy_sections_use_built_in_defaults() {
        let settings = load_from(&minimal_env()).unwrap();

        assert_eq!(settings.game.min_players, 9);
        assert_eq!(settings.game.max_players, 30);
        assert_eq!(settings.game.registration_time, 60);
        assert_eq!(settings.game.extend_time, 30);
        assert_eq!(settings.economy.win_coins, 100);
        assert_eq!(settings.economy.lose_coins, -50);
        assert_eq!(settings.economy.streak_required, 5);
    }

    proptest! {
        #[test]
        fn prop_valid_credentials_echo_through(
            token in "[A-Za-z0-9:_-]{1,40}",
            owner_id in 1i64..=i64::MAX,
        ) {
            let env = MapEnv::new()
                .set("BOT_TOKEN", &token)
                .set("OWNER_ID", &owner_id.to_string());

            let settings = load_from(&env).unwrap();
            prop_assert!(settings.validate().is_ok());
            prop_assert_eq!(settings.bot.token, token);
            prop_assert_eq!(settings.bot.owner_id, owner_id);
        }
    }
}
