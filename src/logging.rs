//! Diagnostic logging
//!
//! Events go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::filter::LevelFilter;

/// Install the global stderr subscriber at the given level.
///
/// Installing twice is not an error; the first subscriber stays in place.
pub fn init_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(parse_level(level))
        .try_init();
}

pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::WARN,
    }
}
