use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown.
const CRATE_TARGETS: &[&str] = &[
    "crescere",
    "crescere_age",
    "crescere_growth",
    "crescere_lms",
    "crescere_reference",
];

/// Level for the number of `-v` flags: warn, info, debug, then trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `crescere=debug,crescere_age=debug,...` for the given verbosity.
fn default_filter(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber.
///
/// Table loading reports at info, lookup misses and skipped z-scores at
/// debug. `RUST_LOG` replaces the `-v` derived filter when set. Events go
/// to stderr so `--json` output on stdout stays parseable.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
