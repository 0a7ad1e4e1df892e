// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Configuration Builder
//!
//! This module provides the main `ConfigBuilder` implementation which is responsible for
//! building application configurations from environment variables and `.env` files.
//!
//! The builder follows a fluent interface pattern, allowing users to selectively enable
//! different configuration sections based on their application's needs. Only the sections
//! that were enabled are loaded and validated.
//!
//! ## Architecture
//!
//! `ConfigBuilder::build` works in three phases:
//!
//! 1. **Environment Loading**: the environment file matching `RUST_ENV` (or the one set with
//!    [`ConfigBuilder::env_file`]) is parsed into a [`KeyValueStore`] together with a snapshot of
//!    the process environment. Process variables override file values.
//!
//! 2. **Base Configuration & Observability**: `AppConfigs` and `OTLPConfigs` are loaded, then the
//!    logger is installed: OTLP-backed when [`ConfigBuilder::otlp`] was called, the stdout-only
//!    noop logger otherwise.
//!
//! 3. **Optional Sections**: each enabled section is loaded in [`Domain::LOAD_ORDER`]. Loading a
//!    section seeds its declared defaults into the store and then deserializes it.
//!
//! Any failure stops the build; no partially filled `Configs` is ever returned.

use crate::{
    configs::{
        AWSConfigs, AppConfigs, Configs, DynamoDBConfigs, HTTPConfigs, IdentityConfigs,
        MQTTConfigs, OTLPConfigs, PostgresConfigs, RabbitMQConfigs,
    },
    defaults::inject_defaults,
    environment::Environment,
    errors::ConfigsError,
    observability::{Logger, noop, otlp},
    schema::ConfigSchema,
    store::KeyValueStore,
};
use std::{collections::BTreeSet, fmt, path::PathBuf};
use tracing::{debug, error};

/// Optional configuration sections the builder can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Http,
    Otlp,
    Postgres,
    Identity,
    Mqtt,
    RabbitMQ,
    Aws,
    DynamoDB,
}

impl Domain {
    /// Order in which enabled sections are loaded after the logger is installed. `Otlp` is not
    /// part of it because it only selects the logger.
    pub const LOAD_ORDER: [Domain; 7] = [
        Domain::Http,
        Domain::Postgres,
        Domain::Identity,
        Domain::Mqtt,
        Domain::RabbitMQ,
        Domain::Aws,
        Domain::DynamoDB,
    ];
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Http => "HTTP",
            Domain::Otlp => "OTLP",
            Domain::Postgres => "Postgres",
            Domain::Identity => "Identity",
            Domain::Mqtt => "MQTT",
            Domain::RabbitMQ => "RabbitMQ",
            Domain::Aws => "AWS",
            Domain::DynamoDB => "DynamoDB",
        };

        f.write_str(name)
    }
}

/// The main configuration builder struct.
///
/// `ConfigBuilder` provides a fluent interface for building application configurations
/// from environment variables and `.env` files. By default, all optional configuration
/// sections are disabled and must be explicitly enabled through the builder methods.
///
/// The builder is consumed by [`build`](ConfigBuilder::build); clone it before building when
/// the same request has to be built more than once.
///
/// # Example
///
/// ```rust,no_run
/// use configs_builder::ConfigBuilder;
///
/// # fn main() -> Result<(), configs_builder::errors::ConfigsError> {
/// let configs = ConfigBuilder::new()
///     .http()
///     .postgres()
///     .otlp()
///     .build()?;
///
/// let http = configs.http.as_ref().expect("http enabled");
/// println!("listening on {}", http.addr());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    enabled: BTreeSet<Domain>,
    env_file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new instance of the `ConfigBuilder` with every optional section disabled.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Enables HTTP server configuration.
    ///
    /// # Environment Variables
    ///
    /// - `HTTP_HOST`: The address to bind (required)
    /// - `HTTP_PORT`: The port to bind (default: 8080)
    /// - `HTTP_PREFIX`: Optional route prefix
    pub fn http(self) -> Self {
        self.enable(Domain::Http)
    }

    /// Enables OpenTelemetry export.
    ///
    /// When enabled, the build installs an OTLP-backed tracer and a JSON logger configured by
    /// the `OTLP_*` keys instead of the stdout-only logger.
    pub fn otlp(self) -> Self {
        self.enable(Domain::Otlp)
    }

    /// Enables PostgreSQL configuration.
    ///
    /// # Environment Variables
    ///
    /// - `SQL_DB_HOST`: The hostname of the PostgreSQL server (required)
    /// - `SQL_DB_PORT`: The port of the PostgreSQL server (default: 5432)
    /// - `SQL_DB_USER`: Username for authentication (required)
    /// - `SQL_DB_PASSWORD`: Password for authentication (required)
    /// - `SQL_DB_NAME`: The name of the database to connect to (required)
    /// - `SQL_DB_SECONDS_TO_PING`: Health check interval in seconds (default: 60)
    /// - `SQL_DB_SSL_MODE`: SSL mode (default: disable)
    pub fn postgres(self) -> Self {
        self.enable(Domain::Postgres)
    }

    /// Enables identity server configuration.
    ///
    /// # Environment Variables
    ///
    /// - `IDENTITY_SERVER_URL`: The base URL of the identity server (default: "http://localhost")
    /// - `IDENTITY_SERVER_REALM`: The realm name (default: "localhost")
    /// - `IDENTITY_SERVER_AUDIENCE`: The audience for token validation (default: "audience")
    /// - `IDENTITY_SERVER_ISSUER`: The issuer for token validation (default: "issuer")
    /// - `IDENTITY_SERVER_GRANT_TYPE`: The OAuth2 grant type (default: "client_credentials")
    /// - `IDENTITY_SERVER_CLIENT_ID`: The client ID (required)
    /// - `IDENTITY_SERVER_CLIENT_SECRET`: The client secret (required)
    pub fn identity(self) -> Self {
        self.enable(Domain::Identity)
    }

    /// Enables MQTT configuration.
    ///
    /// # Environment Variables
    ///
    /// - `MQTT_HOST`: Hostname of the broker (default: "localhost")
    /// - `MQTT_PORT`: Port of the broker (default: 1883)
    /// - `MQTT_USER`: Username for authentication (default: "mqtt")
    /// - `MQTT_PASSWORD`: Password for authentication (default: "password")
    /// - `MQTT_TRANSPORT`: Transport protocol - "tcp", "ssl", "ws", "wss" (default: "tcp")
    /// - `MQTT_BROKER_KIND`: Type of MQTT broker (default: "default")
    /// - `MQTT_CA_CERT_PATH`: Path to the CA certificate for SSL connections
    /// - `MQTT_MULTI_BROKER_ENABLED`: Whether to use `MQTT_BROKERS` (default: false)
    /// - `MQTT_BROKERS`: JSON array of broker connections for multi-broker mode
    pub fn mqtt(self) -> Self {
        self.enable(Domain::Mqtt)
    }

    /// Enables RabbitMQ configuration.
    ///
    /// # Environment Variables
    ///
    /// - `RABBITMQ_HOST`: Hostname of the RabbitMQ server (default: "localhost")
    /// - `RABBITMQ_PORT`: Port of the RabbitMQ server (default: 5672)
    /// - `RABBITMQ_USER`: Username for authentication (default: "guest")
    /// - `RABBITMQ_PASSWORD`: Password for authentication (default: "guest")
    /// - `RABBITMQ_VHOST`: Virtual host to use
    pub fn rabbitmq(self) -> Self {
        self.enable(Domain::RabbitMQ)
    }

    /// Enables AWS configuration.
    ///
    /// # Environment Variables
    ///
    /// - `AWS_DEFAULT_REGION`: The AWS region (default: "us-east-1")
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_SESSION_TOKEN`: Optional credentials
    pub fn aws(self) -> Self {
        self.enable(Domain::Aws)
    }

    /// Enables DynamoDB configuration.
    ///
    /// # Environment Variables
    ///
    /// - `DYNAMO_ENDPOINT`: The endpoint of the DynamoDB service (default: "localhost")
    /// - `DYNAMO_REGION`: The AWS region of the table (default: "us-east-1")
    /// - `DYNAMO_TABLE`: The name of the table (default: "table")
    /// - `DYNAMO_EXPIRE`: Item expiration in seconds (default: 31536000, one year)
    pub fn dynamodb(self) -> Self {
        self.enable(Domain::DynamoDB)
    }

    /// Loads `path` instead of the environment file selected by `RUST_ENV`.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn is_enabled(&self, domain: Domain) -> bool {
        self.enabled.contains(&domain)
    }

    /// Enabled sections, in `Domain` declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Domain> + '_ {
        self.enabled.iter().copied()
    }

    /// The environment file `build` will load.
    ///
    /// Environment detection is based on the `RUST_ENV` environment variable:
    /// - "production" → Production environment (.env.prod)
    /// - "staging" → Staging environment (.env.staging)
    /// - "develop" → Development environment (.env.develop)
    /// - any other value or not set → Local environment (.env.local)
    pub fn env_file_path(&self) -> PathBuf {
        self.env_file
            .clone()
            .unwrap_or_else(|| Environment::from_rust_env().env_file())
    }

    /// Builds the configuration based on the enabled configuration sections.
    ///
    /// This method performs the following operations:
    ///
    /// 1. Loads the environment file and snapshots the process environment
    /// 2. Loads `AppConfigs` and `OTLPConfigs`, applying their declared defaults
    /// 3. Installs the OTLP or the noop logger
    /// 4. Loads every enabled section in [`Domain::LOAD_ORDER`]
    ///
    /// # Errors
    ///
    /// - `ConfigsError::EnvFileLoad` if the environment file is missing or malformed
    /// - `ConfigsError::MissingKey` / `ConfigsError::InvalidValue` if a section cannot be
    ///   deserialized
    /// - `ConfigsError::ValueDecodingError` if an encoded value cannot be decoded
    /// - `ConfigsError::LoggingSetupError` / `ConfigsError::TracesSetupError` if the logger or
    ///   tracer cannot be installed
    pub fn build(self) -> Result<Configs, ConfigsError> {
        let path = self.env_file_path();
        let mut store = match KeyValueStore::load(&path) {
            Ok(s) => Ok(s),
            Err(err) => {
                error!(error = ?err, "failed to load environment file");
                Err(err)
            }
        }?;

        let app = load::<AppConfigs>(&mut store)?;
        let otlp = load::<OTLPConfigs>(&mut store)?;

        let logger = self.setup_observability(&app, &otlp)?;

        let mut cfg = Configs {
            app,
            otlp,
            http: None,
            postgres: None,
            identity: None,
            mqtt: None,
            rabbitmq: None,
            aws: None,
            dynamo: None,
            logger,
            custom: KeyValueStore::new(),
        };

        for domain in Domain::LOAD_ORDER {
            if !self.is_enabled(domain) {
                continue;
            }

            if let Err(err) = self.fill_domain(&mut cfg, &mut store, domain) {
                error!(error = ?err, domain = %domain, "failed to load configs");
                return Err(err);
            }

            debug!(domain = %domain, "configs loaded");
        }

        cfg.custom = store;

        Ok(cfg)
    }
}

// Observability setup
impl ConfigBuilder {
    fn setup_observability(
        &self,
        app: &AppConfigs,
        otlp_cfg: &OTLPConfigs,
    ) -> Result<Logger, ConfigsError> {
        if !self.is_enabled(Domain::Otlp) {
            return noop::install(app).inspect_err(|err| {
                error!(error = ?err, "failed to install noop logger");
            });
        }

        let provider = match otlp::install_tracing(app, otlp_cfg) {
            Ok(p) => Ok(p),
            Err(err) => {
                error!(error = ?err, "failed to install OTLP tracing");
                Err(err)
            }
        }?;

        match otlp::install_logging(app, &provider) {
            Ok(logger) => Ok(logger),
            Err(err) => {
                error!(error = ?err, "failed to install OTLP logger");
                let _ = provider.shutdown();
                Err(err)
            }
        }
    }
}

// Section loading
impl ConfigBuilder {
    fn fill_domain(
        &self,
        cfg: &mut Configs,
        store: &mut KeyValueStore,
        domain: Domain,
    ) -> Result<(), ConfigsError> {
        match domain {
            Domain::Http => cfg.http = Some(load::<HTTPConfigs>(store)?),
            Domain::Postgres => cfg.postgres = Some(load::<PostgresConfigs>(store)?),
            Domain::Identity => cfg.identity = Some(load::<IdentityConfigs>(store)?),
            Domain::Mqtt => cfg.mqtt = Some(load::<MQTTConfigs>(store)?),
            Domain::RabbitMQ => cfg.rabbitmq = Some(load::<RabbitMQConfigs>(store)?),
            Domain::Aws => cfg.aws = Some(load::<AWSConfigs>(store)?),
            Domain::DynamoDB => cfg.dynamo = Some(load::<DynamoDBConfigs>(store)?),
            Domain::Otlp => {}
        }

        Ok(())
    }

    fn enable(mut self, domain: Domain) -> Self {
        self.enabled.insert(domain);
        self
    }
}

/// Seeds the defaults declared by `S` and deserializes it from the store.
fn load<S>(store: &mut KeyValueStore) -> Result<S, ConfigsError>
where
    S: ConfigSchema,
{
    inject_defaults::<S>(store);
    store.unmarshal::<S>().inspect_err(|err| {
        error!(error = ?err, schema = S::NAME, "failed to unmarshal configs");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builder_enables_nothing() {
        let builder = ConfigBuilder::new();

        assert_eq!(builder.enabled().count(), 0);
        assert!(!builder.is_enabled(Domain::Otlp));
    }

    #[test]
    fn enabling_is_monotonic_and_chainable() {
        let builder = ConfigBuilder::new().dynamodb().http().http().otlp();

        assert!(builder.is_enabled(Domain::Http));
        assert!(builder.is_enabled(Domain::DynamoDB));
        assert!(builder.is_enabled(Domain::Otlp));
        assert!(!builder.is_enabled(Domain::Postgres));
        assert_eq!(
            builder.enabled().collect::<Vec<_>>(),
            vec![Domain::Http, Domain::Otlp, Domain::DynamoDB]
        );
    }

    #[test]
    fn cloned_builder_is_independent() {
        let base = ConfigBuilder::new().http();
        let extended = base.clone().postgres();

        assert!(!base.is_enabled(Domain::Postgres));
        assert!(extended.is_enabled(Domain::Postgres));
    }

    #[test]
    fn load_order_excludes_otlp() {
        assert!(!Domain::LOAD_ORDER.contains(&Domain::Otlp));
        assert_eq!(Domain::LOAD_ORDER[0], Domain::Http);
        assert_eq!(Domain::LOAD_ORDER[6], Domain::DynamoDB);
    }

    #[test]
    fn explicit_env_file_overrides_rust_env() {
        let builder = ConfigBuilder::new().env_file("/etc/app/.env");

        assert_eq!(builder.env_file_path(), PathBuf::from("/etc/app/.env"));
    }
}
