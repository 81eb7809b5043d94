//! Widget configuration.
//!
//! # Responsibility
//! - Hold the tunables a host may override (quiz limits, tab policy,
//!   shuffle seed, log level).
//! - Parse host-supplied JSON and reject values that would break panel
//!   invariants.
//!
//! # Invariants
//! - Every numeric limit is at least 1 after validation.
//! - Missing keys fall back to the documented defaults.

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_QUIZ_MIN_ITEMS: usize = 5;
pub const DEFAULT_QUIZ_MAX_QUESTIONS: usize = 10;
pub const DEFAULT_QUIZ_COUNTDOWN_SECS: u32 = 30;

/// What happens to a panel's state when the user switches tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPolicy {
    /// Panels stay alive off-screen; the quiz countdown keeps running.
    #[default]
    KeepMounted,
    /// Leaving a tab discards its panel; returning mounts a fresh one.
    MountOnDemand,
}

/// Quiz limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Fewest usable lines accepted by `start`.
    pub min_items: usize,
    /// Cap on questions selected per session.
    pub max_questions: usize,
    /// Countdown length in seconds.
    pub countdown_secs: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_items: DEFAULT_QUIZ_MIN_ITEMS,
            max_questions: DEFAULT_QUIZ_MAX_QUESTIONS,
            countdown_secs: DEFAULT_QUIZ_COUNTDOWN_SECS,
        }
    }
}

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub tab_policy: TabPolicy,
    pub quiz: QuizConfig,
    /// Fixed shuffle seed; `None` seeds from OS entropy.
    pub quiz_seed: Option<u64>,
    /// Log level requested by the host; read through `effective_log_level`.
    pub log_level: Option<String>,
}

impl WidgetConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Normalized level hosts pass to `init_logging`.
    ///
    /// Falls back to the build-mode default when unset or unrecognized.
    pub fn effective_log_level(&self) -> &'static str {
        self.log_level
            .as_deref()
            .and_then(|level| normalize_level(level).ok())
            .unwrap_or_else(default_log_level)
    }

    /// Checks limits and log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz.min_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.min_items",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.quiz.max_questions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.max_questions",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.quiz.countdown_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quiz.countdown_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|reason| ConfigError::InvalidValue {
                field: "log_level",
                reason,
            })?;
        }
        Ok(())
    }
}

/// Configuration load errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(message) => write!(f, "invalid widget config: {message}"),
            Self::InvalidValue { field, reason } => write!(f, "config `{field}` {reason}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TabPolicy, WidgetConfig};

    #[test]
    fn empty_document_uses_defaults() {
        let config = WidgetConfig::from_json_str("{}").expect("empty config");
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.tab_policy, TabPolicy::KeepMounted);
        assert_eq!(config.quiz.min_items, 5);
        assert_eq!(config.quiz.max_questions, 10);
        assert_eq!(config.quiz.countdown_secs, 30);
    }

    #[test]
    fn partial_quiz_section_keeps_other_defaults() {
        let config = WidgetConfig::from_json_str(
            r#"{"tab_policy":"mount_on_demand","quiz":{"countdown_secs":45},"quiz_seed":7}"#,
        )
        .expect("partial config");
        assert_eq!(config.tab_policy, TabPolicy::MountOnDemand);
        assert_eq!(config.quiz.countdown_secs, 45);
        assert_eq!(config.quiz.max_questions, 10);
        assert_eq!(config.quiz_seed, Some(7));
    }

    #[test]
    fn zero_limits_are_rejected() {
        let err = WidgetConfig::from_json_str(r#"{"quiz":{"max_questions":0}}"#)
            .expect_err("zero max_questions");
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "quiz.max_questions",
                ..
            }
        ));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = WidgetConfig::from_json_str(r#"{"log_level":"loud"}"#)
            .expect_err("bad log level");
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn effective_log_level_prefers_configured_value() {
        let config = WidgetConfig::from_json_str(r#"{"log_level":" Warning "}"#).unwrap();
        assert_eq!(config.effective_log_level(), "warn");
        assert_eq!(
            WidgetConfig::default().effective_log_level(),
            crate::logging::default_log_level()
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WidgetConfig::from_json_str("{").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
