use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Filter applied when `RUST_LOG` is unset: the requested level for the
/// plotlink crates, warn and above for everything else (serialport and
/// friends are chatty at debug).
fn default_filter(level: LogLevel) -> String {
    let directive = level.as_directive();
    format!(
        "warn,plotlink={directive},plotlink_transport={directive},\
         plotlink_proto={directive},plotlink_trace={directive}"
    )
}

pub fn init_logging(format: LogFormat, level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_scopes_level_to_plotlink_crates() {
        let filter = default_filter(LogLevel::Trace);
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("plotlink=trace"));
        assert!(filter.contains("plotlink_proto=trace"));
        assert!(filter.contains("plotlink_transport=trace"));
        assert!(filter.contains("plotlink_trace=trace"));
    }

    #[test]
    fn default_filter_parses_as_env_filter() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            let filter = default_filter(level);
            assert!(
                EnvFilter::try_new(&filter).is_ok(),
                "directive should parse: {filter}"
            );
        }
    }
}
