// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Schema Descriptors
//!
//! Every configuration domain is a plain struct paired with a static descriptor table: for each
//! field, the external key it is read from, an optional default (as text) and whether the key is
//! required. The [`config_schema!`](crate::config_schema) macro writes the struct, the table and
//! the decoding routine from a single declaration, so keys and defaults stay next to the field
//! they describe:
//!
//! ```rust
//! configs_builder::config_schema! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct ServerConfigs("Server") {
//!         pub host: String => "SERVER_HOST",
//!         pub port: u16 => "SERVER_PORT" = "8080",
//!         pub prefix: Option<String> => "SERVER_PREFIX",
//!     }
//! }
//! ```
//!
//! A field with a key and no default is required unless its type is an `Option`.

use crate::{errors::ConfigsError, store::KeyValueStore};

/// Static description of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub field: &'static str,
    /// External key the field is deserialized from.
    pub key: &'static str,
    /// Fallback value used when no layer of the store supplies the key.
    pub default: Option<&'static str>,
    /// Whether deserialization fails when the key has no value at all.
    pub required: bool,
}

/// A configuration schema that can be deserialized from a [`KeyValueStore`].
pub trait ConfigSchema: Sized {
    /// Human readable schema name used in errors and logs.
    const NAME: &'static str;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Builds the schema by reading every field through `reader`.
    fn decode(reader: &FieldReader<'_>) -> Result<Self, ConfigsError>;
}

/// Coercion from the textual value of a key into a field type.
pub trait FromConfigValue: Sized {
    const REQUIRED: bool = true;

    fn parse_value(raw: &str) -> Result<Self, String>;

    /// Value used when the key is absent from every layer; `None` makes the key required.
    fn absent() -> Option<Self> {
        None
    }
}

impl FromConfigValue for String {
    fn parse_value(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl FromConfigValue for bool {
    fn parse_value(raw: &str) -> Result<Self, String> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(format!("`{other}` is not a boolean")),
        }
    }
}

impl<T> FromConfigValue for Option<T>
where
    T: FromConfigValue,
{
    const REQUIRED: bool = false;

    fn parse_value(raw: &str) -> Result<Self, String> {
        T::parse_value(raw).map(Some)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

/// Implements [`FromConfigValue`] through `FromStr` for types whose parse error is displayable.
macro_rules! from_str_config_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::schema::FromConfigValue for $ty {
                fn parse_value(raw: &str) -> Result<Self, String> {
                    raw.trim().parse::<$ty>().map_err(|err| err.to_string())
                }
            }
        )*
    };
}

pub(crate) use from_str_config_value;

from_str_config_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Reads typed field values for one schema out of a store.
pub struct FieldReader<'a> {
    store: &'a KeyValueStore,
    schema: &'static str,
}

impl<'a> FieldReader<'a> {
    pub fn new(store: &'a KeyValueStore, schema: &'static str) -> Self {
        FieldReader { store, schema }
    }

    pub fn read<T>(&self, key: &str) -> Result<T, ConfigsError>
    where
        T: FromConfigValue,
    {
        match self.store.get(key)? {
            Some(raw) => T::parse_value(&raw).map_err(|reason| ConfigsError::InvalidValue {
                schema: self.schema,
                key: key.to_string(),
                reason,
            }),
            None => T::absent().ok_or_else(|| ConfigsError::MissingKey {
                schema: self.schema,
                key: key.to_string(),
            }),
        }
    }
}

/// Declares a configuration struct together with its [`ConfigSchema`] implementation.
///
/// Each field is written as `name: Type => "KEY"` or `name: Type => "KEY" = "default"`.
#[macro_export]
macro_rules! config_schema {
    (@default) => {
        ::core::option::Option::None
    };
    (@default $default:literal) => {
        ::core::option::Option::Some($default)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($label:literal) {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty => $key:literal $(= $default:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::schema::ConfigSchema for $name {
            const NAME: &'static str = $label;

            const FIELDS: &'static [$crate::schema::FieldDescriptor] = &[
                $(
                    $crate::schema::FieldDescriptor {
                        field: ::core::stringify!($field),
                        key: $key,
                        default: $crate::config_schema!(@default $($default)?),
                        required: <$fty as $crate::schema::FromConfigValue>::REQUIRED,
                    },
                )*
            ];

            #[allow(unused_variables)]
            fn decode(
                reader: &$crate::schema::FieldReader<'_>,
            ) -> ::core::result::Result<Self, $crate::errors::ConfigsError> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: reader.read::<$fty>($key)?,
                    )*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Layer;

    crate::config_schema! {
        #[derive(Debug, Clone, PartialEq)]
        struct ServerConfigs("Server") {
            host: String => "SERVER_HOST",
            port: u16 => "SERVER_PORT" = "8080",
            debug: bool => "SERVER_DEBUG" = "false",
            prefix: Option<String> => "SERVER_PREFIX",
        }
    }

    #[test]
    fn descriptor_table_follows_declaration() {
        let fields = ServerConfigs::FIELDS;

        assert_eq!(ServerConfigs::NAME, "Server");
        assert_eq!(fields.len(), 4);
        assert_eq!(
            fields[0],
            FieldDescriptor {
                field: "host",
                key: "SERVER_HOST",
                default: None,
                required: true,
            }
        );
        assert_eq!(fields[1].default, Some("8080"));
        assert_eq!(fields[2].key, "SERVER_DEBUG");
        assert!(!fields[3].required);
    }

    #[test]
    fn decodes_present_values() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "SERVER_HOST", "0.0.0.0");
        store.insert(Layer::File, "SERVER_PORT", "9000");
        store.insert(Layer::File, "SERVER_DEBUG", "yes");
        store.insert(Layer::File, "SERVER_PREFIX", "/api");

        let cfg: ServerConfigs = store.unmarshal().unwrap();

        assert_eq!(
            cfg,
            ServerConfigs {
                host: "0.0.0.0".into(),
                port: 9000,
                debug: true,
                prefix: Some("/api".into()),
            }
        );
    }

    #[test]
    fn missing_required_key_is_reported() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "SERVER_PORT", "9000");
        store.insert(Layer::File, "SERVER_DEBUG", "false");

        let err = store.unmarshal::<ServerConfigs>().unwrap_err();

        assert_eq!(
            err,
            ConfigsError::MissingKey {
                schema: "Server",
                key: "SERVER_HOST".into(),
            }
        );
    }

    #[test]
    fn failed_coercion_is_reported() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "SERVER_HOST", "localhost");
        store.insert(Layer::File, "SERVER_PORT", "eighty");
        store.insert(Layer::File, "SERVER_DEBUG", "false");

        let err = store.unmarshal::<ServerConfigs>().unwrap_err();

        assert!(matches!(
            err,
            ConfigsError::InvalidValue { schema: "Server", ref key, .. } if key == "SERVER_PORT"
        ));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let mut store = KeyValueStore::new();
        store.insert(Layer::File, "SERVER_HOST", "localhost");
        store.insert(Layer::File, "SERVER_PORT", "80");
        store.insert(Layer::File, "SERVER_DEBUG", "off");

        let cfg: ServerConfigs = store.unmarshal().unwrap();

        assert_eq!(cfg.prefix, None);
        assert!(!cfg.debug);
    }

    #[test]
    fn bool_accepts_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(bool::parse_value(raw), Ok(true));
        }
        for raw in ["false", "0", "No", "off"] {
            assert_eq!(bool::parse_value(raw), Ok(false));
        }
        assert!(bool::parse_value("maybe").is_err());
    }

    #[test]
    fn numbers_are_trimmed_before_parsing() {
        assert_eq!(u16::parse_value(" 5432 "), Ok(5432));
        assert_eq!(f64::parse_value("0.25"), Ok(0.25));
        assert!(u16::parse_value("70000").is_err());
    }
}
