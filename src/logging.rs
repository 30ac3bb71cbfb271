//! Tracing setup shared by the server and CLI binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive for a configured level. `RUST_LOG` wins when set.
pub fn filter_directive(config: &LoggingConfig) -> String {
    directive_from(std::env::var("RUST_LOG").ok(), config)
}

fn directive_from(rust_log: Option<String>, config: &LoggingConfig) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ => format!("garfield_vibes={},tower_http=debug", config.level),
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::new(filter_directive(config));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Subscriber for command-line tools: warnings and up, written to stderr
pub fn init_stderr() {
    let config = LoggingConfig {
        level: "warn".to_string(),
        format: "pretty".to_string(),
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(&config)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            format: "pretty".to_string(),
        }
    }

    #[test]
    fn test_directive_uses_configured_level() {
        assert_eq!(
            directive_from(None, &config("debug")),
            "garfield_vibes=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_rust_log_overrides_level() {
        let directive = directive_from(Some("warn".to_string()), &config("debug"));
        assert_eq!(directive, "warn");
    }

    #[test]
    fn test_blank_rust_log_is_ignored() {
        let directive = directive_from(Some("  ".to_string()), &config("info"));
        assert_eq!(directive, "garfield_vibes=info,tower_http=debug");
    }
}
