//! # sentinel-log
//!
//! Logging bootstrap shared by the sentinel crates.
//!
//! Library code only uses the `tracing` macros; binaries call one of the
//! init functions once at startup to install a `tracing-subscriber` stack
//! (an `EnvFilter` plus a pretty, compact or JSON formatter).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentinel_log::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // SENTINEL_LOG / RUST_LOG if set, otherwise a build-dependent preset
//!     let _guard = sentinel_log::auto_init()?;
//!
//!     info!(targets = 2, "validating");
//!     Ok(())
//! }
//! ```

mod builder;
mod config;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, ENV_FILTER, ENV_FORMAT, Format, Level, Writer};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Level, Result, auto_init, debug, error, info, init, init_with, trace, warn};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Error type for logger operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Filter directives could not be parsed
    #[error("invalid log filter `{filter}`: {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Initialization Functions
// ============================================================================

/// Pick a configuration from the environment and install it.
///
/// Uses [`Config::from_env`] when `SENTINEL_LOG` or `RUST_LOG` is set, the
/// development preset in debug builds and the production preset otherwise.
pub fn auto_init() -> Result<LoggerGuard> {
    let explicit = std::env::var_os(ENV_FILTER).is_some() || std::env::var_os("RUST_LOG").is_some();
    if explicit {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> Result<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize unless a global subscriber already exists.
///
/// Meant for tests, where several cases race to set up logging.
pub fn init_test() -> Result<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    match init_with(Config::test()) {
        Err(Error::AlreadyInitialized) => Ok(LoggerGuard::noop()),
        other => other,
    }
}
