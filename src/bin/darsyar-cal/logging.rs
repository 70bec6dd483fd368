use tracing_subscriber::EnvFilter;

/// The library (month derivation, conversions) and this binary (argument handling).
const CRATE_TARGETS: &[&str] = &["darsyar_calendar", "darsyar_cal"];

/// Filter directives for `darsyar_calendar` and `darsyar_cal` at the level picked by `-v`.
///
/// No flag keeps warnings only; each `-v` opens one level, up to trace at `-vvv`.
fn default_filter(verbosity: u8) -> String {
    let level = ["warn", "info", "debug", "trace"][verbosity.min(3) as usize];
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
