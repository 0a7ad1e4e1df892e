// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment Keys
//!
//! Constant definitions shared by the builder and the key/value store: the variable that selects
//! the deployment environment, the environment file names and the marker for encoded values.
//!
//! Keys belonging to a single configuration domain live next to that domain's schema in the
//! `configs` module.

/// Environment variable that selects the deployment environment.
pub const RUST_ENV_KEY: &str = "RUST_ENV";

/// Environment file names for different deployment environments
pub const LOCAL_ENV_FILE_NAME: &str = "./.env.local";
pub const DEV_ENV_FILE_NAME: &str = "./.env.develop";
pub const STAGING_FILE_NAME: &str = "./.env.staging";
pub const PROD_FILE_NAME: &str = "./.env.prod";

/// Values starting with this prefix carry a base64 payload that is decoded on read.
pub const ENCODED_VALUE_PREFIX: &str = "!!";
