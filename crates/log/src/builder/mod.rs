//! Logger builder implementation

#[macro_use]
mod format;

use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{Config, Format, Writer};
use crate::{Error, Result};

type Filtered = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization.
///
/// Holds the configuration the global subscriber was built from. Dropping it
/// does not uninstall the subscriber.
#[derive(Debug)]
#[must_use = "the guard reports the active logging configuration"]
pub struct LoggerGuard {
    config: Option<Config>,
}

impl LoggerGuard {
    /// A guard for a process where logging was already set up elsewhere.
    pub const fn noop() -> Self {
        Self { config: None }
    }

    /// The configuration this guard installed, if it installed one.
    #[must_use]
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the subscriber without installing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filter`] if the filter directives cannot be parsed.
    pub fn subscriber(&self) -> Result<impl Subscriber + Send + Sync + use<>> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| Error::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let writer = match self.config.writer {
            Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
            Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        };

        let display = &self.config.display;
        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => {
                create_fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display, writer)
            }
            Format::Compact => {
                create_fmt_layer!(tracing_subscriber::fmt::layer().compact(), display, writer)
            }
            Format::Json => create_json_layer!(display, writer),
        };

        Ok(Registry::default().with(filter).with(fmt_layer))
    }

    /// Build and install the logger as the global default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Filter`] if the filter directives cannot be parsed and
    /// [`Error::AlreadyInitialized`] if a global subscriber is already set.
    pub fn build(self) -> Result<LoggerGuard> {
        self.subscriber()?
            .try_init()
            .map_err(|_| Error::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            config: Some(self.config),
        })
    }
}
