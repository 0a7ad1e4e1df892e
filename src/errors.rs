// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Errors
//!
//! Error types for the configs_builder crate.
//!
//! Every failure of a configuration build falls into one of three classes: the environment file
//! could not be loaded, a schema could not be deserialized from the key/value store, or the
//! observability stack could not be installed. All of them are terminal for a build.

use thiserror::Error;

/// Errors that can occur during configuration building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigsError {
    /// The selected environment file is missing, unreadable or malformed.
    ///
    /// # Arguments
    ///
    /// * `path` - The environment file that was being loaded
    /// * `reason` - The underlying I/O or parse failure
    #[error("failed to load env file `{path}` - {reason}")]
    EnvFileLoad { path: String, reason: String },

    /// A required key has no value in any layer of the key/value store.
    #[error("missing required key `{key}` for {schema} configs")]
    MissingKey { schema: &'static str, key: String },

    /// A value was found but could not be coerced into the field's type.
    #[error("invalid value for `{key}` in {schema} configs - {reason}")]
    InvalidValue {
        schema: &'static str,
        key: String,
        reason: String,
    },

    /// An encoded (`!!`-prefixed) value could not be decoded.
    #[error("failed to decode value of `{key}` - {reason}")]
    ValueDecodingError { key: String, reason: String },

    /// Error that occurred while setting up the logging subsystem.
    ///
    /// This error indicates that there was an issue configuring or initializing
    /// the logging subscriber, usually an invalid `LOG_LEVEL` directive.
    #[error("failed to configure logging - {0}")]
    LoggingSetupError(String),

    /// Error that occurred while setting up the tracing subsystem.
    ///
    /// This error indicates that there was an issue configuring or initializing
    /// the traces provider. Check the OTLP exporter endpoint and settings.
    #[error("failed to configure trace - {0}")]
    TracesSetupError(String),
}
