// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use crate::config_schema;

pub const AWS_DEFAULT_REGION: &str = "us-east-1";

config_schema! {
    /// AWS credentials and region.
    ///
    /// Credentials are optional so the SDK's own provider chain (instance profile, SSO, ...) can
    /// take over when they are not set.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AWSConfigs("AWS") {
        pub region: String => "AWS_DEFAULT_REGION" = "us-east-1",
        pub access_key_id: Option<String> => "AWS_ACCESS_KEY_ID",
        pub secret_access_key: Option<String> => "AWS_SECRET_ACCESS_KEY",
        pub session_token: Option<String> => "AWS_SESSION_TOKEN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::ConfigSchema, store::KeyValueStore};

    #[test]
    fn declared_region_default_matches_constant() {
        let region = AWSConfigs::FIELDS
            .iter()
            .find(|f| f.key == "AWS_DEFAULT_REGION")
            .and_then(|f| f.default);

        assert_eq!(region, Some(AWS_DEFAULT_REGION));
    }

    #[test]
    fn credentials_are_optional() {
        let mut store = KeyValueStore::new();
        crate::defaults::inject_defaults::<AWSConfigs>(&mut store);

        let cfg: AWSConfigs = store.unmarshal().unwrap();

        assert_eq!(cfg.region, AWS_DEFAULT_REGION);
        assert!(cfg.access_key_id.is_none());
        assert!(cfg.secret_access_key.is_none());
    }
}
