//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string such as `info` or
/// `planet_catalog=debug,tower_http=info`; an unparseable directive falls back
/// to `info`. With `json` set, events are emitted as one JSON object per line.
pub fn init(filter: &str, json: bool) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
