// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! OpenTelemetry exporter settings, always loaded and used when the builder enables OTLP.

use crate::config_schema;
use std::time::Duration;

config_schema! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct OTLPConfigs("OTLP") {
        /// Full URL of the OTLP/HTTP traces endpoint.
        pub endpoint: String => "OTLP_EXPORTER_ENDPOINT" = "http://localhost:4318/v1/traces",
        /// Sent as the `api-key` header when present.
        pub access_key: Option<String> => "OTLP_ACCESS_KEY",
        pub exporter_timeout_secs: u64 => "OTLP_EXPORTER_TIMEOUT" = "30",
        pub exporter_interval_secs: u64 => "OTLP_EXPORTER_INTERVAL" = "5",
        /// Ratio of root traces sampled, between 0.0 and 1.0.
        pub exporter_rate_base: f64 => "OTLP_EXPORTER_RATE_BASE" = "1.0",
    }
}

impl OTLPConfigs {
    pub fn exporter_timeout(&self) -> Duration {
        Duration::from_secs(self.exporter_timeout_secs)
    }

    pub fn exporter_interval(&self) -> Duration {
        Duration::from_secs(self.exporter_interval_secs)
    }
}
