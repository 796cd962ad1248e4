//! Leveled console logger with configurable line formatting.

mod macros;

pub mod config;
pub mod logger;
pub mod observability;

pub use config::LoggerConfig;
pub use logger::{
    init_shared, shared, BuildMode, CallSite, DisplayConfig, LabelStyle, LineFormat, LogLevel,
    LogSink, Logger, MemorySink, Settings, StdoutSink,
};
