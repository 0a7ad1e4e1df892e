// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! OTLP-backed tracing and logging.
//!
//! [`install_tracing`] builds the tracer provider and registers it globally; [`install_logging`]
//! bridges `tracing` spans and events into that provider and emits JSON log lines.

use super::{Logger, env_filter};
use crate::{
    configs::{AppConfigs, OTLPConfigs},
    errors::ConfigsError,
};
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_otlp::{SpanExporter, WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    trace::{BatchConfigBuilder, BatchSpanProcessor, Sampler, SdkTracerProvider},
};
use std::collections::HashMap;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

const ACCESS_KEY_HEADER: &str = "api-key";

/// Builds the OTLP span exporter and installs the global tracer provider.
///
/// # Errors
///
/// Returns `ConfigsError::TracesSetupError` when the endpoint is not an http(s) URL or the
/// exporter cannot be built.
pub fn install_tracing(
    app: &AppConfigs,
    otlp: &OTLPConfigs,
) -> Result<SdkTracerProvider, ConfigsError> {
    if !(otlp.endpoint.starts_with("http://") || otlp.endpoint.starts_with("https://")) {
        return Err(ConfigsError::TracesSetupError(format!(
            "unsupported exporter endpoint `{}`",
            otlp.endpoint
        )));
    }

    let mut headers = HashMap::new();
    if let Some(key) = &otlp.access_key {
        headers.insert(ACCESS_KEY_HEADER.to_string(), key.clone());
    }

    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(otlp.endpoint.clone())
        .with_timeout(otlp.exporter_timeout())
        .with_headers(headers)
        .build()
        .map_err(|err| ConfigsError::TracesSetupError(err.to_string()))?;

    let batch_config = BatchConfigBuilder::default()
        .with_scheduled_delay(otlp.exporter_interval())
        .build();

    let processor = BatchSpanProcessor::builder(exporter)
        .with_batch_config(batch_config)
        .build();

    let resource = Resource::builder()
        .with_attributes(vec![
            KeyValue::new("service.name", app.name.clone()),
            KeyValue::new("service.namespace", app.namespace.clone()),
            KeyValue::new("deployment.environment", app.environment.to_string()),
        ])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_span_processor(processor)
        .with_resource(resource)
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
            otlp.exporter_rate_base,
        ))))
        .build();

    global::set_tracer_provider(provider.clone());
    global::set_text_map_propagator(TraceContextPropagator::new());

    Ok(provider)
}

/// Installs a JSON logger whose spans and events are exported through `provider`.
pub fn install_logging(
    app: &AppConfigs,
    provider: &SdkTracerProvider,
) -> Result<Logger, ConfigsError> {
    let filter = env_filter(&app.log_level)?;
    let tracer = provider.tracer(app.name.clone());

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .with(fmt::layer().json())
        .try_init()
    {
        debug!(error = %err, "global subscriber already installed, keeping it");
    }

    Ok(Logger::otlp(provider.clone()))
}
