//! Logging and OpenTelemetry initialization
//!
//! Console output is human-readable or JSON, optionally mirrored to a
//! rotating log file. When enabled, spans are exported over OTLP so that
//! every log line carries trace context. `RUST_LOG` overrides the configured
//! level.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    trace::{Sampler, TracerProvider},
    Resource,
};
use std::fs;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::{FileRotation, LoggingConfig};

/// Keeps the file writer and tracer provider alive; shuts telemetry down on drop.
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
    otel_enabled: bool,
}

/// Initialize logging from `config`.
///
/// Keep the returned guard alive for the duration of the program.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<TelemetryGuard> {
    let (tracer_provider, otel_error) = if config.opentelemetry_enabled {
        match init_tracer_provider(config) {
            Ok(provider) => (Some(provider), None),
            Err(e) => (None, Some(e.to_string())),
        }
    } else {
        (None, None)
    };

    let otel_layer = tracer_provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer("pokedex-server"))
            .with_tracked_inactivity(true)
    });

    let (file_writer, file_guard) = if config.file_enabled {
        let (writer, guard) = create_file_appender(config)?;
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(otel_layer)
        .with(console_layer(config.json))
        .with(file_writer.map(|writer| file_layer(config.json, writer)))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    let otel_enabled = tracer_provider.is_some();
    if let Some(provider) = tracer_provider {
        global::set_tracer_provider(provider);
    }

    if let Some(err) = otel_error {
        tracing::warn!(
            error = %err,
            "Failed to initialize OpenTelemetry tracer provider, continuing without OpenTelemetry"
        );
    }

    tracing::info!(
        otel_enabled,
        json = config.json,
        file_enabled = config.file_enabled,
        service_name = %config.service_name,
        environment = %config.deployment_environment,
        "Logging initialized"
    );

    Ok(TelemetryGuard {
        _file_guard: file_guard,
        otel_enabled,
    })
}

fn console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stdout)
            .boxed()
    }
}

fn file_layer<S>(json: bool, writer: NonBlocking) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    }
}

fn build_resource(config: &LoggingConfig) -> Resource {
    let service_version = config
        .service_version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", service_version),
        KeyValue::new(
            "deployment.environment",
            config.deployment_environment.clone(),
        ),
    ])
}

fn sampler(ratio: f64) -> Sampler {
    if ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio)))
    }
}

/// OTLP (gRPC) tracer provider with a batch span processor
fn init_tracer_provider(config: &LoggingConfig) -> anyhow::Result<TracerProvider> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(&config.otlp_endpoint)
        .with_timeout(Duration::from_secs(config.otlp_timeout_seconds))
        .build_span_exporter()
        .map_err(|e| anyhow::anyhow!("Failed to create OTLP exporter: {}", e))?;

    let trace_config = opentelemetry_sdk::trace::Config::default()
        .with_sampler(sampler(config.trace_sample_ratio))
        .with_resource(build_resource(config));

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_config(trace_config)
        .build())
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pokedex_server={level},pokedex_query={level},tower_http=info,reqwest=warn,hyper=warn",
            level = config.level
        ))
    })
}

fn create_file_appender(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let dir = &config.file_directory;
    let prefix = &config.file_prefix;
    let appender = match config.file_rotation {
        FileRotation::Minutely => tracing_appender::rolling::minutely(dir, prefix),
        FileRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
        FileRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
        FileRotation::Never => tracing_appender::rolling::never(dir, format!("{prefix}.log")),
    };

    Ok(tracing_appender::non_blocking(appender))
}

/// Flush and shut down the global tracer provider.
pub fn shutdown_telemetry() {
    tracing::info!("Shutting down OpenTelemetry...");
    global::shutdown_tracer_provider();
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if self.otel_enabled {
            shutdown_telemetry();
        }
    }
}
