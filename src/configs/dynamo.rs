// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use crate::config_schema;
use std::time::Duration;

config_schema! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DynamoDBConfigs("DynamoDB") {
        pub endpoint: String => "DYNAMO_ENDPOINT" = "localhost",
        pub region: String => "DYNAMO_REGION" = "us-east-1",
        pub table: String => "DYNAMO_TABLE" = "table",
        /// Item time-to-live, in seconds. Defaults to one year.
        pub expire: u64 => "DYNAMO_EXPIRE" = "31536000",
    }
}

impl DynamoDBConfigs {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.expire)
    }
}
