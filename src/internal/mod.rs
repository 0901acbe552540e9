pub mod color;
pub mod config;
pub mod logger;
pub mod severity;
pub mod sink;
