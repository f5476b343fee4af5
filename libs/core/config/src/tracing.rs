use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const PRODUCTION_FILTER: &str = "info,tower_http=warn";
const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug";

/// Install the color-eyre report hook.
///
/// Call first thing in `main`. Shows the error location, hides the
/// environment section. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter from `RUST_LOG`, or the environment's default.
fn env_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new(PRODUCTION_FILTER)
        } else {
            EnvFilter::new(DEVELOPMENT_FILTER)
        }
    })
}

/// Initialize the global subscriber.
///
/// - **Production** (`APP_ENV=production`): flattened JSON lines for log
///   aggregation, defaulting to `info`.
/// - **Development**: pretty multi-line output, defaulting to `debug`.
///
/// Both include `tracing_error::ErrorLayer` so eyre reports carry the span
/// trace of the failing operation. `RUST_LOG` overrides the default filter
/// (e.g. `RUST_LOG=domain_events=trace`).
///
/// Safe to call more than once; later calls are no-ops.
///
/// # Example with instrumentation
///
/// ```ignore
/// use tracing::instrument;
///
/// #[instrument(skip(self, input), fields(event_name = %input.name))]
/// pub async fn create_event(&self, input: EventInput) -> EventResult<Event> {
///     // spans recorded here show up in error reports
/// }
/// ```
pub fn init_tracing(environment: &Environment) {
    let registry = tracing_subscriber::registry()
        .with(tracing_error::ErrorLayer::default())
        .with(env_filter(environment));

    let result = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .try_init()
    };

    match result {
        Ok(_) => info!("Tracing initialized. Environment: {:?}", environment),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
