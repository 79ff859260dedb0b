//! Pizzeria configuration from environment variables.

use crate::timer::{InstantTimer, TimeSource, TokioTimer};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Default descriptive name
pub const DEFAULT_NAME: &str = "Pizzeria";

/// Default capacity of the order actor's request channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

pub const ENV_NAME: &str = "PIZZERIA_NAME";
pub const ENV_CHANNEL_CAPACITY: &str = "PIZZERIA_CHANNEL_CAPACITY";
pub const ENV_TIMER: &str = "PIZZERIA_TIMER";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which [`TimeSource`] the pizzeria bakes with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    /// Real waits on the tokio timer.
    #[default]
    Real,
    /// No waiting at all.
    Instant,
}

impl TimerKind {
    pub fn build(self) -> Arc<dyn TimeSource> {
        match self {
            TimerKind::Real => Arc::new(TokioTimer),
            TimerKind::Instant => Arc::new(InstantTimer),
        }
    }
}

impl FromStr for TimerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real" => Ok(TimerKind::Real),
            "instant" => Ok(TimerKind::Instant),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_TIMER,
                value: s.to_string(),
            }),
        }
    }
}

/// Pizzeria configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PizzeriaConfig {
    /// Descriptive name, shown in logs
    pub name: String,

    /// Capacity of the order actor's request channel, at least 1
    pub channel_capacity: usize,

    /// Time source used for baking
    pub timer: TimerKind,
}

impl Default for PizzeriaConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            timer: TimerKind::default(),
        }
    }
}

impl PizzeriaConfig {
    /// Load configuration from environment variables, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_NAME).filter(|s| !s.is_empty()) {
            config.name = name;
        }
        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            config.channel_capacity = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_CHANNEL_CAPACITY,
                    value: raw.clone(),
                })?;
        }
        if let Some(raw) = lookup(ENV_TIMER) {
            config.timer = raw.parse()?;
        }

        Ok(config)
    }
}
