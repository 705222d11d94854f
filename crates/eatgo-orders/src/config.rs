//! Engine configuration.
//!
//! Every setting has a default; [`EngineConfig::from_env`] overrides them from
//! `EATGO_*` environment variables at bootstrap.

use thiserror::Error;

pub const ACTOR_BUFFER_SIZE_VAR: &str = "EATGO_ACTOR_BUFFER_SIZE";
pub const NOTIFICATION_RETENTION_VAR: &str = "EATGO_NOTIFICATION_RETENTION";
pub const REVIEW_COMMENT_MAX_LEN_VAR: &str = "EATGO_REVIEW_COMMENT_MAX_LEN";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Request channel capacity of every resource actor.
    pub actor_buffer_size: usize,
    /// Notifications kept per user; older ones are evicted.
    pub notification_retention: usize,
    /// Maximum review comment length in characters, after trimming.
    pub review_comment_max_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            actor_buffer_size: 32,
            notification_retention: 50,
            review_comment_max_len: 1000,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing variables keep
    /// their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            actor_buffer_size: read(&lookup, ACTOR_BUFFER_SIZE_VAR, defaults.actor_buffer_size)?,
            notification_retention: read(
                &lookup,
                NOTIFICATION_RETENTION_VAR,
                defaults.notification_retention,
            )?,
            review_comment_max_len: read(
                &lookup,
                REVIEW_COMMENT_MAX_LEN_VAR,
                defaults.review_comment_max_len,
            )?,
        })
    }
}

fn read(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    let parsed: usize = value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.clone(),
    })?;
    if parsed == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(parsed)
}
