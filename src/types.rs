//! Common types used throughout list-pager

use serde::{Deserialize, Serialize};

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Output Format
// ============================================================================

/// How pagination snapshots are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output (one snapshot per line)
    #[default]
    Json,
    /// Human-readable list view
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::WARN);
    }

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, OutputFormat::Pretty);
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
    }
}
