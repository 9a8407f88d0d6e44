//! where: calldata-grind logging; what: tracing subscriber setup; why: same filter semantics as the node wrapper

use crate::config::DEFAULT_LOG_FILTER;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber once. Later calls are no-ops.
pub fn init_tracing(filter: Option<&str>, json: bool) {
    static LOG_INIT: OnceLock<()> = OnceLock::new();
    let _ = LOG_INIT.get_or_init(|| {
        let env_filter = resolve_env_filter(filter);
        if json {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_target(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::fmt()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter)
                .try_init();
        }
    });
}

fn resolve_env_filter(filter: Option<&str>) -> EnvFilter {
    let directive = filter
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER);
    match EnvFilter::try_new(directive) {
        Ok(env_filter) => env_filter,
        Err(err) => {
            eprintln!("invalid log filter {directive:?} ({err}); using {DEFAULT_LOG_FILTER}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    }
}
