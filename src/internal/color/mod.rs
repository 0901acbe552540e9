pub mod contrast;
pub mod palette;

// Re-export main types
pub use contrast::{is_dark, relative_luminance};
pub use palette::{background_hex, channel_hash, color_for, ChannelStyle, Rgb, BLACK, WHITE};
