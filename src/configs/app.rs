// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! Base application settings, always loaded.

use crate::{config_schema, environment::Environment, schema::from_str_config_value};

from_str_config_value!(Environment);

config_schema! {
    /// Identity of the running application and its logging level.
    #[derive(Debug, Clone, PartialEq)]
    pub struct AppConfigs("App") {
        pub name: String => "APP_NAME" = "app",
        pub namespace: String => "APP_NAMESPACE" = "local",
        pub environment: Environment => "RUST_ENV" = "local",
        /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `my_app=debug,info`.
        pub log_level: String => "LOG_LEVEL" = "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        defaults::inject_defaults,
        store::{KeyValueStore, Layer},
    };

    #[test]
    fn falls_back_to_declared_defaults() {
        let mut store = KeyValueStore::new();
        inject_defaults::<AppConfigs>(&mut store);

        let app: AppConfigs = store.unmarshal().unwrap();

        assert_eq!(
            app,
            AppConfigs {
                name: "app".into(),
                namespace: "local".into(),
                environment: Environment::Local,
                log_level: "info".into(),
            }
        );
    }

    #[test]
    fn reads_environment_from_rust_env_key() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::Environment, "RUST_ENV", "production");
        inject_defaults::<AppConfigs>(&mut store);

        let app: AppConfigs = store.unmarshal().unwrap();

        assert_eq!(app.environment, Environment::Prod);
    }
}
