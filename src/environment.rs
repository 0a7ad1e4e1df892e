// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment
//!
//! Deployment environment detection. The `RUST_ENV` variable decides which environment file the
//! builder loads:
//! - "production" or "prod" → Production environment (.env.prod)
//! - "staging" or "stg" → Staging environment (.env.staging)
//! - "develop", "development" or "dev" → Development environment (.env.develop)
//! - any other value or not set → Local environment (.env.local)

use crate::env_keys::{
    DEV_ENV_FILE_NAME, LOCAL_ENV_FILE_NAME, PROD_FILE_NAME, RUST_ENV_KEY, STAGING_FILE_NAME,
};
use std::{convert::Infallible, env, fmt, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Staging,
    Prod,
}

impl Environment {
    /// Reads the deployment environment from the `RUST_ENV` process variable.
    pub fn from_rust_env() -> Environment {
        env::var(RUST_ENV_KEY)
            .map(|v| Environment::from(v.as_str()))
            .unwrap_or_default()
    }

    /// The environment file loaded for this deployment environment.
    pub fn env_file(&self) -> PathBuf {
        let name = match self {
            Environment::Prod => PROD_FILE_NAME,
            Environment::Staging => STAGING_FILE_NAME,
            Environment::Dev => DEV_ENV_FILE_NAME,
            Environment::Local => LOCAL_ENV_FILE_NAME,
        };

        PathBuf::from(name)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Prod,
            "staging" | "stg" => Environment::Staging,
            "develop" | "development" | "dev" => Environment::Dev,
            _ => Environment::Local,
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Environment::from(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "develop",
            Environment::Staging => "staging",
            Environment::Prod => "production",
        };

        f.write_str(name)
    }
}
