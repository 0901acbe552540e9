mod _config;
pub mod trace_channels;

pub use _config::{
    get_version_info, AppConfig, ConsoleConfig, LogConfig, LoggingConfig, OutputFormat,
    SharedConfig, VERSION,
};
pub use trace_channels::{TraceChannels, WILDCARD};
