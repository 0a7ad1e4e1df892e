// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Configs Builder
//!
//! `configs_builder` assembles an application's runtime configuration from `.env` files and
//! process environment variables, loading only the configuration sections the application
//! asks for.
//!
//! ## Features
//!
//! - One `.env` file per deployment environment (local, develop, staging, production), selected
//!   by `RUST_ENV`
//! - Process environment variables override file values; schema-declared defaults fill the gaps
//! - Typed configuration sections for HTTP, PostgreSQL, identity servers, MQTT, RabbitMQ, AWS
//!   and DynamoDB
//! - Logging through `tracing`, with optional OpenTelemetry (OTLP) span export
//!
//! ## Example
//!
//! ```rust,no_run
//! use configs_builder::ConfigBuilder;
//!
//! fn setup_configs() -> Result<(), Box<dyn std::error::Error>> {
//!     let configs = ConfigBuilder::new()
//!         .http()
//!         .postgres()
//!         .otlp()
//!         .build()?;
//!
//!     let db = configs.postgres.as_ref().expect("postgres enabled");
//!     println!("connecting to {}:{}", db.host, db.port);
//!
//!     configs.logger.shutdown()?;
//!     Ok(())
//! }
//! ```

mod configs_builder;
pub mod configs;
pub mod defaults;
pub mod env_keys;
pub mod environment;
pub mod errors;
pub mod observability;
pub mod schema;
pub mod store;

pub use configs::Configs;
pub use configs_builder::{ConfigBuilder, Domain};
pub use errors::ConfigsError;
