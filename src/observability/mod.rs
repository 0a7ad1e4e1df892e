// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Observability
//!
//! Installs the process-wide `tracing` subscriber once the base configuration is known.
//!
//! - [`noop`] logs to stdout and exports nothing.
//! - [`otlp`] additionally exports spans to an OpenTelemetry collector over OTLP/HTTP and emits
//!   JSON log lines.
//!
//! A global subscriber can only be set once per process. When one is already installed, the
//! installers keep it and still return a usable [`Logger`].

pub mod noop;
pub mod otlp;

use crate::errors::ConfigsError;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerKind {
    Noop,
    Otlp,
}

/// Handle to the logger installed by a build.
#[derive(Debug, Clone)]
pub struct Logger {
    kind: LoggerKind,
    tracer_provider: Option<SdkTracerProvider>,
}

impl Logger {
    pub(crate) fn noop() -> Logger {
        Logger {
            kind: LoggerKind::Noop,
            tracer_provider: None,
        }
    }

    pub(crate) fn otlp(provider: SdkTracerProvider) -> Logger {
        Logger {
            kind: LoggerKind::Otlp,
            tracer_provider: Some(provider),
        }
    }

    pub fn kind(&self) -> LoggerKind {
        self.kind
    }

    pub fn is_exporting(&self) -> bool {
        self.tracer_provider.is_some()
    }

    /// Flushes pending spans and stops the exporter. Call it once, before the process exits.
    pub fn shutdown(&self) -> Result<(), ConfigsError> {
        let Some(provider) = &self.tracer_provider else {
            return Ok(());
        };

        provider
            .shutdown()
            .map_err(|err| ConfigsError::TracesSetupError(err.to_string()))
    }
}

pub(crate) fn env_filter(directive: &str) -> Result<EnvFilter, ConfigsError> {
    EnvFilter::try_new(directive).map_err(|err| ConfigsError::LoggingSetupError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_logger_shuts_down_cleanly() {
        let logger = Logger::noop();

        assert_eq!(logger.kind(), LoggerKind::Noop);
        assert!(!logger.is_exporting());
        assert_eq!(logger.shutdown(), Ok(()));
    }

    #[test]
    fn accepts_filter_directives() {
        assert!(env_filter("info").is_ok());
        assert!(env_filter("configs_builder=debug,warn").is_ok());
    }
}
