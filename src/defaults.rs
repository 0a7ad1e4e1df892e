// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Default Injection
//!
//! Seeds the defaults declared on a schema into the default layer of a [`KeyValueStore`] before
//! the schema is deserialized, so unset keys resolve to the declared default instead of failing
//! as missing.
//!
//! Defaults share one namespace: when two schemas declare a default for the same key, the schema
//! injected first owns it. Explicit file or environment values always win over any default.

use crate::{schema::ConfigSchema, store::KeyValueStore};
use tracing::trace;

/// Registers every default declared by `S`, returning how many were newly registered.
///
/// Fields lacking either a key or a non-empty default are skipped. Running it again for the
/// same schema registers nothing.
pub fn inject_defaults<S>(store: &mut KeyValueStore) -> usize
where
    S: ConfigSchema,
{
    let mut registered = 0;

    for field in S::FIELDS {
        let Some(default) = field.default.filter(|d| !d.is_empty()) else {
            continue;
        };
        if field.key.is_empty() {
            continue;
        }

        if store.set_default(field.key, default) {
            trace!(schema = S::NAME, key = field.key, "default registered");
            registered += 1;
        }
    }

    registered
}
