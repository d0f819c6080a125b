//! Logger configuration
//!
//! A [`Config`] is plain data: it can be deserialized from a config file,
//! read from the environment with [`Config::from_env`], or taken from one of
//! the presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable holding the filter directives.
pub const ENV_FILTER: &str = "SENTINEL_LOG";
/// Environment variable holding the output format.
pub const ENV_FORMAT: &str = "SENTINEL_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g. `"info"`, `"debug,sentinel_validator=trace"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output stream
    pub writer: Writer,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Compact single-line output
    #[default]
    Compact,
    /// Structured JSON output, one object per line
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    #[default]
    Stderr,
    Stdout,
}

/// Display configuration
///
/// Independent toggles that map one-to-one onto `tracing-subscriber`'s
/// formatter options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: false,
            target: true,
            thread_ids: false,
            colors: true,
            span_list: false,
            flatten: false,
        }
    }
}

// ============================================================================
// Implementations
// ============================================================================

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info.to_string(),
            format: Format::Compact,
            writer: Writer::Stderr,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `SENTINEL_LOG` (falling back to `RUST_LOG`) for the filter,
    /// `SENTINEL_LOG_FORMAT` for the format and honours `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_FILTER).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // an unknown format keeps the default
        if let Some(format) = lookup(ENV_FORMAT).and_then(|f| f.parse().ok()) {
            config.format = format;
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.display.colors = false;
        }

        config
    }

    /// Replaces the filter with a single level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level.to_string();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug.to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::Info.to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (everything, no colors or timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: Level::Trace.to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
