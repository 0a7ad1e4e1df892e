// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use crate::config_schema;

config_schema! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RabbitMQConfigs("RabbitMQ") {
        pub host: String => "RABBITMQ_HOST" = "localhost",
        pub port: u16 => "RABBITMQ_PORT" = "5672",
        pub user: String => "RABBITMQ_USER" = "guest",
        pub password: String => "RABBITMQ_PASSWORD" = "guest",
        pub vhost: Option<String> => "RABBITMQ_VHOST",
    }
}
