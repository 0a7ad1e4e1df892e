// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! PostgreSQL connection settings.
//!
//! Host, user, password and database name have no defaults and must be provided by the
//! environment file or the process environment.

use crate::{config_schema, schema::from_str_config_value};
use std::{fmt, str::FromStr, time::Duration};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    #[default]
    Disable,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" | "disabled" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" | "verify_ca" => Ok(SslMode::VerifyCa),
            "verify-full" | "verify_full" => Ok(SslMode::VerifyFull),
            other => Err(format!("unknown ssl mode `{other}`")),
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

from_str_config_value!(SslMode);

config_schema! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PostgresConfigs("Postgres") {
        pub host: String => "SQL_DB_HOST",
        pub port: u16 => "SQL_DB_PORT" = "5432",
        pub user: String => "SQL_DB_USER",
        pub password: String => "SQL_DB_PASSWORD",
        pub db_name: String => "SQL_DB_NAME",
        /// Interval between connection health checks, in seconds.
        pub seconds_to_ping: u64 => "SQL_DB_SECONDS_TO_PING" = "60",
        pub ssl_mode: SslMode => "SQL_DB_SSL_MODE" = "disable",
    }
}

impl PostgresConfigs {
    pub fn ping_interval(&self) -> Duration {
        Duration::from_secs(self.seconds_to_ping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        defaults::inject_defaults,
        errors::ConfigsError,
        store::{KeyValueStore, Layer},
    };

    fn store_with_credentials() -> KeyValueStore {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "SQL_DB_HOST", "db.internal");
        store.insert(Layer::File, "SQL_DB_USER", "svc");
        store.insert(Layer::File, "SQL_DB_PASSWORD", "file-secret");
        store.insert(Layer::File, "SQL_DB_NAME", "orders");
        store
    }

    #[test]
    fn applies_defaults_for_optional_keys() {
        let mut store = store_with_credentials();
        inject_defaults::<PostgresConfigs>(&mut store);

        let cfg: PostgresConfigs = store.unmarshal().unwrap();

        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.ssl_mode, SslMode::Disable);
        assert_eq!(cfg.ping_interval(), Duration::from_secs(60));
    }

    #[test]
    fn rejects_unknown_ssl_mode() {
        let mut store = store_with_credentials();
        store.insert(Layer::Environment, "SQL_DB_SSL_MODE", "sometimes");
        inject_defaults::<PostgresConfigs>(&mut store);

        let err = store.unmarshal::<PostgresConfigs>().unwrap_err();

        assert_eq!(
            err,
            ConfigsError::InvalidValue {
                schema: "Postgres",
                key: "SQL_DB_SSL_MODE".into(),
                reason: "unknown ssl mode `sometimes`".into(),
            }
        );
    }

    #[test]
    fn parses_ssl_mode_aliases() {
        assert_eq!("VERIFY_FULL".parse::<SslMode>(), Ok(SslMode::VerifyFull));
        assert_eq!("disabled".parse::<SslMode>(), Ok(SslMode::Disable));
        assert_eq!(SslMode::VerifyCa.to_string(), "verify-ca");
    }
}
