// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! MQTT broker settings.
//!
//! A single broker is described by the `MQTT_HOST`/`MQTT_PORT`/... keys. When
//! `MQTT_MULTI_BROKER_ENABLED` is true, `MQTT_BROKERS` holds a JSON array of broker connections
//! instead:
//!
//! ```text
//! MQTT_BROKERS=[{"host":"a.broker","port":8883,"transport":"ssl"},{"host":"b.broker","port":1883}]
//! ```

use crate::{config_schema, schema::from_str_config_value};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MQTTTransport {
    #[default]
    Tcp,
    Ssl,
    Ws,
    Wss,
}

impl FromStr for MQTTTransport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcp" => Ok(MQTTTransport::Tcp),
            "ssl" | "tls" => Ok(MQTTTransport::Ssl),
            "ws" => Ok(MQTTTransport::Ws),
            "wss" => Ok(MQTTTransport::Wss),
            other => Err(format!("unknown mqtt transport `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum MQTTBrokerKind {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "aws-iot-core")]
    AWSIoTCore,
}

impl FromStr for MQTTBrokerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(MQTTBrokerKind::Default),
            "aws-iot-core" | "aws_iot_core" | "awsiotcore" => Ok(MQTTBrokerKind::AWSIoTCore),
            other => Err(format!("unknown mqtt broker kind `{other}`")),
        }
    }
}

/// Connection settings for one broker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MQTTConnectionConfigs {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub transport: MQTTTransport,
    #[serde(default)]
    pub broker_kind: MQTTBrokerKind,
    #[serde(default)]
    pub root_ca_path: Option<String>,
}

/// Broker list parsed from the JSON value of `MQTT_BROKERS`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MQTTBrokers(pub Vec<MQTTConnectionConfigs>);

impl FromStr for MQTTBrokers {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(MQTTBrokers)
    }
}

from_str_config_value!(MQTTTransport, MQTTBrokerKind, MQTTBrokers);

config_schema! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MQTTConfigs("MQTT") {
        pub host: String => "MQTT_HOST" = "localhost",
        pub port: u16 => "MQTT_PORT" = "1883",
        pub user: String => "MQTT_USER" = "mqtt",
        pub password: String => "MQTT_PASSWORD" = "password",
        pub transport: MQTTTransport => "MQTT_TRANSPORT" = "tcp",
        pub broker_kind: MQTTBrokerKind => "MQTT_BROKER_KIND" = "default",
        pub root_ca_path: Option<String> => "MQTT_CA_CERT_PATH",
        pub multi_broker_enabled: bool => "MQTT_MULTI_BROKER_ENABLED" = "false",
        pub brokers: Option<MQTTBrokers> => "MQTT_BROKERS",
    }
}

impl MQTTConfigs {
    /// Brokers to connect to: the `MQTT_BROKERS` list in multi-broker mode, otherwise the single
    /// broker described by the flat keys.
    pub fn connections(&self) -> Vec<MQTTConnectionConfigs> {
        if self.multi_broker_enabled
            && let Some(brokers) = &self.brokers
        {
            return brokers.0.clone();
        }

        vec![MQTTConnectionConfigs {
            host: self.host.clone(),
            port: self.port,
            user: Some(self.user.clone()),
            password: Some(self.password.clone()),
            transport: self.transport,
            broker_kind: self.broker_kind,
            root_ca_path: self.root_ca_path.clone(),
        }]
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

    const BROKERS: &str = r#"[
        {"host": "a.broker", "port": 8883, "transport": "ssl", "broker_kind": "aws-iot-core"},
        {"host": "b.broker", "port": 1883, "user": "svc"}
    ]"#;

    fn load(store: &mut KeyValueStore) -> Result<MQTTConfigs, ConfigsError> {
        inject_defaults::<MQTTConfigs>(store);
        store.unmarshal()
    }

    #[test]
    fn single_broker_by_default() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "MQTT_BROKERS", BROKERS);

        let cfg = load(&mut store).unwrap();
        let connections = cfg.connections();

        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].host, "localhost");
        assert_eq!(connections[0].port, 1883);
        assert_eq!(connections[0].transport, MQTTTransport::Tcp);
    }

    #[test]
    fn multi_broker_mode_uses_broker_list() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "MQTT_MULTI_BROKER_ENABLED", "true");
        store.insert(Layer::File, "MQTT_BROKERS", BROKERS);

        let cfg = load(&mut store).unwrap();
        let connections = cfg.connections();

        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].transport, MQTTTransport::Ssl);
        assert_eq!(connections[0].broker_kind, MQTTBrokerKind::AWSIoTCore);
        assert_eq!(connections[1].user.as_deref(), Some("svc"));
        assert_eq!(connections[1].transport, MQTTTransport::Tcp);
    }

    #[test]
    fn malformed_broker_list_is_invalid() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "MQTT_BROKERS", "[{\"host\": }]");

        let err = load(&mut store).unwrap_err();

        assert!(matches!(
            err,
            ConfigsError::InvalidValue { schema: "MQTT", ref key, .. } if key == "MQTT_BROKERS"
        ));
    }

    #[test]
    fn parses_transport_names() {
        assert_eq!("WSS".parse::<MQTTTransport>(), Ok(MQTTTransport::Wss));
        assert_eq!("tls".parse::<MQTTTransport>(), Ok(MQTTTransport::Ssl));
        assert!("udp".parse::<MQTTTransport>().is_err());
    }
}
