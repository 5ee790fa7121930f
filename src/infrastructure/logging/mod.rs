//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional rolling JSON log files via tracing-appender

/// Subscriber setup
pub mod logger;

pub use logger::LoggerImpl;
