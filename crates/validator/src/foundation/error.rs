//! Structural errors raised by the registry.
//!
//! Rule-level problems (failed checks, misconfigured arguments) never become
//! errors: they are reported as [`StatusCode`](super::StatusCode)s in the
//! status list. Only problems with the targets themselves end up here.

/// Error raised when a registry cannot evaluate a target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text source has no current text for a registered target.
    #[error("no text available for target {target}")]
    TargetUnavailable {
        /// Debug rendering of the target key.
        target: String,
    },

    /// The target has no rule set in the registry.
    #[error("target {target} has no rule set")]
    UnknownTarget {
        /// Debug rendering of the target key.
        target: String,
    },
}

impl Error {
    pub(crate) fn unavailable(target: &impl std::fmt::Debug) -> Self {
        Self::TargetUnavailable {
            target: format!("{target:?}"),
        }
    }

    pub(crate) fn unknown(target: &impl std::fmt::Debug) -> Self {
        Self::UnknownTarget {
            target: format!("{target:?}"),
        }
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;
