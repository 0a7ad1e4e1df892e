// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use super::{Logger, env_filter};
use crate::{configs::AppConfigs, errors::ConfigsError};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stdout logger filtered by `LOG_LEVEL`, without any telemetry export.
pub fn install(app: &AppConfigs) -> Result<Logger, ConfigsError> {
    let filter = env_filter(&app.log_level)?;

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
    {
        debug!(error = %err, "global subscriber already installed, keeping it");
    }

    Ok(Logger::noop())
}
