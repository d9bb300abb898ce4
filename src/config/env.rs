//! Environment source abstraction
//!
//! A narrow `get(key)` capability over process environment variables, so
//! the loader and section builders depend on an injectable source rather
//! than ambient global lookup. Tests use [`MapEnv`] to stay deterministic
//! without leaking state between cases.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::utils::errors::Result;

/// Raw key-value provider for configuration input
pub trait EnvSource {
    /// Look up a raw value; absent keys yield `None`, never an error
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a value, falling back to the supplied default
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Live process environment
///
/// A variable set to the empty string is reported as present; rejecting
/// empty required values is the validator's job, not the source's.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory environment for tests
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Merge key=value pairs from `path` into the process environment
///
/// Variables already present in the environment keep their values; the
/// file only fills in what is missing.
pub fn prime_from_file(path: &Path) -> Result<()> {
    dotenv::from_path(path)?;
    debug!("Environment primed from {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().set("BOT_TOKEN", "abc123");

        assert_eq!(env.get("BOT_TOKEN"), Some("abc123".to_string()));
        assert_eq!(env.get("OWNER_ID"), None);
    }

    #[test]
    fn test_get_or_falls_back_only_when_absent() {
        let env = MapEnv::new().set("DATABASE_PATH", "custom.db").set("EMPTY", "");

        assert_eq!(env.get_or("DATABASE_PATH", "shadowkz.db"), "custom.db");
        assert_eq!(env.get_or("MISSING", "shadowkz.db"), "shadowkz.db");
        // present-but-empty is not absent
        assert_eq!(env.get_or("EMPTY", "shadowkz.db"), "");
    }
}
