// src/internal/logger/mod.rs

pub mod channel;
pub mod diagnostics;
pub mod logger;
mod macros;

pub use channel::{Bare, ChannelEmitter, UNFORMATTABLE};
pub use diagnostics::init_tracing;
pub use logger::Logger;

// Note: The channel_* macros are exported at the crate root via #[macro_export]
// e.g. `vacme_log::channel_info!(channel, "saved {}", id)`
