//! ShadowKZ configuration check
//!
//! Standalone diagnostic entry point: loads the configuration from the
//! process environment, validates it, and prints a human-readable
//! summary or the violation reason. A failed check is reported, never a
//! crash; the bot runtime must not start on a reported failure.

use tracing::debug;

use ShadowKZ::utils::{helpers, logging};
use ShadowKZ::{load, Settings};

fn main() -> anyhow::Result<()> {
    let settings = match load(None) {
        Ok(settings) => settings,
        Err(e) => {
            println!("❌ Error: {}", e);
            return Ok(());
        }
    };

    logging::init_logging(settings.debug)?;

    if settings.debug {
        debug!("Loaded settings: {}", serde_json::to_string_pretty(&settings)?);
    }

    match settings.validate() {
        Ok(()) => print_summary(&settings),
        Err(e) => println!("❌ Error: {}", e),
    }

    Ok(())
}

/// Print the startup summary for a valid configuration
fn print_summary(settings: &Settings) {
    println!("✅ Configuration is valid!");
    println!("🤖 Bot token: {}", helpers::mask_secret(&settings.bot.token, 10));
    println!("👤 Owner ID: {}", settings.bot.owner_id);
    println!("💾 Database: {}", settings.database.path);
    println!(
        "🎮 Min/Max players: {}/{}",
        settings.game.min_players, settings.game.max_players
    );
    println!(
        "💰 Win reward: {}🪙, {}⭐",
        helpers::format_delta(settings.economy.win_coins),
        helpers::format_delta(settings.economy.win_rating)
    );
}
