use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "tarot_oracle=info,tower_http=info,warn";
const VERBOSE_DIRECTIVES: &str = "tarot_oracle=debug,tower_http=debug,info";

/// 日誌輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 終端機用的精簡格式
    Compact,
    /// 每行一筆 JSON，給容器的日誌收集器
    Json,
}

impl LogFormat {
    pub fn from_flag(json_logs: bool) -> Self {
        if json_logs {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the built-in filter.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(verbose).compact())
            .init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_flag() {
        assert_eq!(LogFormat::from_flag(true), LogFormat::Json);
        assert_eq!(LogFormat::from_flag(false), LogFormat::Compact);
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.contains("tarot_oracle="));
            assert!(EnvFilter::try_new(directives).is_ok());
        }
        assert!(default_directives(true).contains("tarot_oracle=debug"));
    }
}
