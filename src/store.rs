// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Key/Value Store
//!
//! A layered resolver over the live process environment, the selected `.env` file and the
//! defaults declared by configuration schemas. A key is answered by the highest layer that has a
//! non-empty value for it:
//!
//! 1. [`Layer::Environment`] - snapshot of the process environment taken when the store is loaded
//! 2. [`Layer::File`] - pairs parsed from the environment file
//! 3. [`Layer::Default`] - defaults registered through [`KeyValueStore::set_default`]
//!
//! Loading the file never mutates the process environment, so the precedence above is the only
//! thing deciding which value wins.
//!
//! Values starting with [`ENCODED_VALUE_PREFIX`] carry a base64 payload and are decoded on read.

use crate::{
    env_keys::ENCODED_VALUE_PREFIX,
    errors::ConfigsError,
    schema::{ConfigSchema, FieldReader, FromConfigValue},
};
use base64::{Engine, engine::general_purpose};
use std::{collections::BTreeMap, env, path::Path};
use tracing::{debug, error};

/// A source of values, ordered from highest to lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Environment,
    File,
    Default,
}

impl Layer {
    /// All layers, highest precedence first.
    pub const PRECEDENCE: [Layer; 3] = [Layer::Environment, Layer::File, Layer::Default];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueStore {
    environment: BTreeMap<String, String>,
    file: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl KeyValueStore {
    /// Creates an empty store with no layer populated.
    pub fn new() -> KeyValueStore {
        KeyValueStore::default()
    }

    /// Loads the environment file at `path` and snapshots the live process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigsError::EnvFileLoad` if the file does not exist, cannot be read, or
    /// contains a line that is not a valid `KEY=VALUE` pair.
    pub fn load(path: impl AsRef<Path>) -> Result<KeyValueStore, ConfigsError> {
        let path = path.as_ref();
        let load_err = |reason: String| ConfigsError::EnvFileLoad {
            path: path.display().to_string(),
            reason,
        };

        let iter = dotenvy::from_filename_iter(path).map_err(|err| load_err(err.to_string()))?;

        let mut store = KeyValueStore::new();
        for item in iter {
            let (key, value) = item.map_err(|err| load_err(err.to_string()))?;
            store.file.insert(key, value);
        }

        store.environment = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        debug!(
            path = %path.display(),
            file_keys = store.file.len(),
            "environment file loaded"
        );

        Ok(store)
    }

    /// Sets `key` in the given layer, replacing any previous value of that layer.
    pub fn insert(&mut self, layer: Layer, key: impl Into<String>, value: impl Into<String>) {
        self.layer_mut(layer).insert(key.into(), value.into());
    }

    /// Registers a fallback for `key` unless one is already registered.
    ///
    /// Returns `true` when the default was registered. Values from the file or the environment
    /// always take precedence over a default regardless of registration order.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.defaults.contains_key(&key) {
            return false;
        }

        self.defaults.insert(key, value.into());
        true
    }

    /// Returns the layer answering `key` along with its raw value.
    pub fn lookup(&self, key: &str) -> Option<(Layer, &str)> {
        Layer::PRECEDENCE.into_iter().find_map(|layer| {
            self.layer(layer)
                .get(key)
                .map(String::as_str)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (layer, v))
        })
    }

    pub fn source_of(&self, key: &str) -> Option<Layer> {
        self.lookup(key).map(|(layer, _)| layer)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Resolves `key`, decoding encoded values.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigsError> {
        let Some((_, raw)) = self.lookup(key) else {
            return Ok(None);
        };

        match raw.strip_prefix(ENCODED_VALUE_PREFIX) {
            Some(encoded) => self.decoded(key, encoded).map(Some),
            None => Ok(Some(raw.to_string())),
        }
    }

    /// Resolves and coerces a single value, `None` when the key is unset.
    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>, ConfigsError>
    where
        T: FromConfigValue,
    {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };

        T::parse_value(&raw)
            .map(Some)
            .map_err(|reason| ConfigsError::InvalidValue {
                schema: "custom",
                key: key.to_string(),
                reason,
            })
    }

    /// Deserializes a whole schema out of the store.
    pub fn unmarshal<S>(&self) -> Result<S, ConfigsError>
    where
        S: ConfigSchema,
    {
        S::decode(&FieldReader::new(self, S::NAME))
    }

    /// Registered defaults, ordered by key.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn layer(&self, layer: Layer) -> &BTreeMap<String, String> {
        match layer {
            Layer::Environment => &self.environment,
            Layer::File => &self.file,
            Layer::Default => &self.defaults,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut BTreeMap<String, String> {
        match layer {
            Layer::Environment => &mut self.environment,
            Layer::File => &mut self.file,
            Layer::Default => &mut self.defaults,
        }
    }

    fn decoded(&self, key: &str, text: &str) -> Result<String, ConfigsError> {
        let bytes = match general_purpose::STANDARD.decode(text.trim()) {
            Err(err) => {
                error!(key = key, error = err.to_string(), "base64 decoded error");
                Err(ConfigsError::ValueDecodingError {
                    key: key.to_string(),
                    reason: err.to_string(),
                })
            }
            Ok(v) => Ok(v),
        }?;

        String::from_utf8(bytes).map_err(|err| {
            error!(key = key, error = err.to_string(), "error to convert to String");
            ConfigsError::ValueDecodingError {
                key: key.to_string(),
                reason: err.to_string(),
            }
        })
    }
}
