use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `KEEPCHAIN_LOG=debug`.
const LOG_ENV: &str = "KEEPCHAIN_LOG";

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!("keepchain_core=warn,{}=warn", env!("CARGO_CRATE_NAME")))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
