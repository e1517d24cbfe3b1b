//! Tracing subscriber setup.
//!
//! ## Usage
//!
//! ```ignore
//! use payform_core::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("payform=debug")
//!     .init()?;
//! ```
//!
//! Without an explicit filter, `RUST_LOG` is honoured and
//! [`DEFAULT_FILTER`] is used when it is unset.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{PayformError, PayformResult};

/// Filter used when neither `--log-filter` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "payform=info,payform_core=info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            ansi: true,
        }
    }

    /// Set the filter directive (e.g. "payform=info,payform_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Disable ANSI colours in console output.
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Resolve the filter: explicit directive, then `RUST_LOG`, then default.
    pub fn build_filter(&self) -> PayformResult<EnvFilter> {
        match &self.env_filter {
            Some(directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Install the subscriber globally.
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> PayformResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = tracing_subscriber::fmt::layer().with_ansi(self.ansi);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| PayformError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        let filter = LoggingBuilder::new()
            .with_filter("payform=debug")
            .build_filter()
            .unwrap();
        assert!(filter.to_string().contains("payform=debug"));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let result = LoggingBuilder::new()
            .with_filter("payform=notalevel")
            .build_filter();
        assert!(matches!(result, Err(PayformError::LogFilter(_))));
    }

    #[test]
    fn no_ansi_disables_colours() {
        assert!(LoggingBuilder::new().ansi);
        assert!(!LoggingBuilder::new().no_ansi().ansi);
    }

    #[test]
    fn default_builder_resolves_a_filter() {
        assert!(LoggingBuilder::default().build_filter().is_ok());
    }
}
