//! Logging configuration using env_logger.
//!
//! All log output goes to stderr so that stdout stays reserved for the
//! file listing and the delimited content stream.

use anyhow::Result;
use log::{Level, LevelFilter, debug, error, info, trace, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Initialize logging at the default `info` level.
///
/// `RUST_LOG` still overrides the level when set. Calling this more than
/// once is harmless; only the first call configures the logger.
pub fn init() -> Result<()> {
    init_with_level(LevelFilter::Info)
}

/// Initialize logging with an explicit default level.
///
/// # Arguments
///
/// * `level` - The level used when `RUST_LOG` does not say otherwise
///
/// # Returns
///
/// A Result indicating success or failure of the initialization
pub fn init_with_level(level: LevelFilter) -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| match setup_logger(level) {
        Ok(_) => {
            debug!("Logging initialized with stderr output");
        }
        Err(e) => {
            // Cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use filebatch::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Warn,
///     LogMessage {
///         message: "Failed to read file".to_string(),
///         module: "emit",
///         context: Some(vec![("file_path", "frontend/src/app.tsx".to_string())]),
///     }
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    match level {
        Level::Error => error!(target: msg.module, "{}", format_context(&msg)),
        Level::Warn => warn!(target: msg.module, "{}", format_context(&msg)),
        Level::Info => info!(target: msg.module, "{}", format_context(&msg)),
        Level::Debug => debug!(target: msg.module, "{}", format_context(&msg)),
        Level::Trace => trace!(target: msg.module, "{}", format_context(&msg)),
    }
}

/// Format a log message with its context for display
fn format_context(msg: &LogMessage) -> String {
    match &msg.context {
        Some(context) => {
            let context_str = context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");

            format!("{} [{}]", msg.message, context_str)
        }
        None => msg.message.clone(),
    }
}

fn setup_logger(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_context_without_context() {
        let msg = LogMessage {
            message: "plain".to_string(),
            module: "test",
            context: None,
        };
        assert_eq!(format_context(&msg), "plain");
    }

    #[test]
    fn test_format_context_with_pairs() {
        let msg = LogMessage {
            message: "Error walking directory".to_string(),
            module: "test",
            context: Some(vec![
                ("directory", "frontend".to_string()),
                ("depth", "2".to_string()),
            ]),
        };
        assert_eq!(
            format_context(&msg),
            "Error walking directory [directory=frontend, depth=2]"
        );
    }
}
