use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main(), before any fallible operations, so errors
/// get colored reports. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware output and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON events with flattened
///   fields and hidden targets, ready for log aggregation.
/// - **Development** (default): pretty-printed, human-readable output.
///
/// Both modes install `tracing_error::ErrorLayer` underneath so span traces
/// are available when errors surface.
///
/// Environment variables:
/// - `APP_ENV`: "production" switches to JSON logs (default: "development")
/// - `RUST_LOG`: overrides log levels (e.g. "debug", "users_api=trace")
///
/// Safe to call multiple times: if a subscriber is already installed the
/// call is a no-op (common in tests).
pub fn init_tracing(environment: &Environment) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(environment));

    let base = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(filter);

    let installed = if environment.is_production() {
        base.with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .flatten_event(true),
        )
        .try_init()
        .is_ok()
    } else {
        base.with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .pretty(),
        )
        .try_init()
        .is_ok()
    };

    if installed {
        info!(?environment, "Tracing initialized with ErrorLayer");
    } else {
        debug!("Subscriber already installed, leaving it in place");
    }
}

/// Level directives used when `RUST_LOG` is unset.
fn default_directives(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,sea_orm=warn")
    } else {
        EnvFilter::new("debug")
    }
}
