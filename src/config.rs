//! Runner configuration read from `BLOCKFALL_*` environment variables.

use std::env;
use std::path::PathBuf;

use crate::core::{EngineConfig, Randomizer};
use crate::types::{DROP_INTERVAL_MS, HARD_DROP_GRACE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub drop_interval_ms: u32,
    pub hard_drop_grace_ms: u32,
    pub seed: u64,
    pub randomizer: Randomizer,
    /// JSON Lines event log; `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
            hard_drop_grace_ms: HARD_DROP_GRACE_MS,
            seed: rand::random(),
            randomizer: Randomizer::Uniform,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing or unparseable values use the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let drop_interval_ms = get("BLOCKFALL_DROP_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.drop_interval_ms)
            .max(1);

        let hard_drop_grace_ms = get("BLOCKFALL_HARD_DROP_GRACE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.hard_drop_grace_ms);

        let seed = get("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let randomizer = get("BLOCKFALL_RANDOMIZER")
            .and_then(|s| Randomizer::from_str(&s))
            .unwrap_or(defaults.randomizer);

        let log_path = get("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        Self {
            drop_interval_ms,
            hard_drop_grace_ms,
            seed,
            randomizer,
            log_path,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            drop_interval_ms: self.drop_interval_ms,
            hard_drop_grace_ms: self.hard_drop_grace_ms,
            seed: self.seed,
            randomizer: self.randomizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.hard_drop_grace_ms, 50);
        assert_eq!(config.randomizer, Randomizer::Uniform);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_DROP_MS", "250"),
            ("BLOCKFALL_HARD_DROP_GRACE_MS", "0"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_RANDOMIZER", "bag7"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.jsonl "),
        ]));
        assert_eq!(config.drop_interval_ms, 250);
        assert_eq!(config.hard_drop_grace_ms, 0);
        assert_eq!(config.seed, 42);
        assert_eq!(config.randomizer, Randomizer::SevenBag);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.jsonl")));

        let engine = config.engine_config();
        assert_eq!(engine.drop_interval_ms, 250);
        assert_eq!(engine.seed, 42);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BLOCKFALL_DROP_MS", "fast"),
            ("BLOCKFALL_RANDOMIZER", "shuffled"),
            ("BLOCKFALL_LOG_PATH", "   "),
        ]));
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.randomizer, Randomizer::Uniform);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_zero_drop_interval_is_clamped() {
        let config = AppConfig::from_lookup(lookup(&[("BLOCKFALL_DROP_MS", "0")]));
        assert_eq!(config.drop_interval_ms, 1);
    }
}
