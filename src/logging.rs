//! Log output for the `illuscribe` binary
//!
//! Parse, layout and render code only writes through the `log` macros. The
//! binary picks the backend here, before any deck is read.

use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Which records reach stderr, and whether they are colored
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directives such as `"debug"` or `"illuscribe::layout=debug"`. Falls
    /// back to `RUST_LOG` when unset.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_write_style(mut self, style: WriteStyle) -> Self {
        self.write_style = style;
        self
    }
}

static LOGGER: Once = Once::new();

/// Install the stderr logger. Without a filter, only the tolerated anomalies
/// (unknown keywords, vertical overflow) and errors are printed. Later calls
/// do nothing.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        let directives = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        match directives {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(LevelFilter::Warn),
        };
        builder
            .write_style(config.write_style)
            .format_timestamp(None)
            .format_target(false);

        if builder.try_init().is_ok() {
            log::debug!("stderr logger ready");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_options() {
        let config = LoggingConfig::new()
            .with_filter("illuscribe::parser=debug")
            .with_write_style(WriteStyle::Never);
        assert_eq!(config.env_filter.as_deref(), Some("illuscribe::parser=debug"));
        assert!(matches!(config.write_style, WriteStyle::Never));
        assert!(LoggingConfig::default().env_filter.is_none());
    }

    #[test]
    fn test_second_install_is_ignored() {
        init_logging(LoggingConfig::new().with_filter("warn"));
        init_logging(LoggingConfig::new().with_filter("trace"));
        log::warn!("logging from a test after two installs");
    }
}
