// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Configuration Schemas
//!
//! One module per configuration domain, plus the [`Configs`] bundle returned by
//! [`ConfigBuilder::build`](crate::ConfigBuilder::build).
//!
//! Every schema is declared with [`config_schema!`](crate::config_schema), so its keys and
//! defaults can be inspected through [`ConfigSchema::FIELDS`](crate::schema::ConfigSchema::FIELDS).

pub mod app;
pub mod aws;
pub mod dynamo;
pub mod http;
pub mod identity;
pub mod mqtt;
pub mod otlp;
pub mod postgres;
pub mod rabbitmq;

use crate::{observability::Logger, store::KeyValueStore};

pub use app::AppConfigs;
pub use aws::AWSConfigs;
pub use dynamo::DynamoDBConfigs;
pub use http::HTTPConfigs;
pub use identity::IdentityConfigs;
pub use mqtt::MQTTConfigs;
pub use otlp::OTLPConfigs;
pub use postgres::PostgresConfigs;
pub use rabbitmq::RabbitMQConfigs;

/// The assembled application configuration.
///
/// `app` and `otlp` are always present. Each optional block is `Some` exactly when the matching
/// builder method was called.
#[derive(Debug)]
pub struct Configs {
    pub app: AppConfigs,
    pub otlp: OTLPConfigs,
    pub http: Option<HTTPConfigs>,
    pub postgres: Option<PostgresConfigs>,
    pub identity: Option<IdentityConfigs>,
    pub mqtt: Option<MQTTConfigs>,
    pub rabbitmq: Option<RabbitMQConfigs>,
    pub aws: Option<AWSConfigs>,
    pub dynamo: Option<DynamoDBConfigs>,
    /// Logger installed while building.
    pub logger: Logger,
    /// The store every block was read from, for keys no schema covers.
    pub custom: KeyValueStore,
}
