// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use crate::config_schema;

config_schema! {
    /// HTTP server bind settings.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HTTPConfigs("HTTP") {
        pub host: String => "HTTP_HOST",
        pub port: u16 => "HTTP_PORT" = "8080",
        /// Optional route prefix, e.g. `/api`.
        pub prefix: Option<String> => "HTTP_PREFIX",
    }
}

impl HTTPConfigs {
    /// `host:port` pair suitable for binding a listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
