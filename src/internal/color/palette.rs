// src/internal/color/palette.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::contrast::is_dark;

pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Upper-case `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgb::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}'", raw)))
    }
}

/// Background/foreground pair identifying a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ChannelStyle {
    /// CSS-like style directive for sinks that understand one.
    pub fn directive(&self) -> String {
        format!(
            "color: {}; background: {}; padding: 2px 4px; border-radius: 2px",
            self.foreground, self.background
        )
    }
}

/// Rolling 32-bit hash over UTF-16 code units: `h = code + h * 31`, wrapping.
pub fn channel_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Background color for a channel, as `#RRGGBB`.
///
/// The absolute hash is rendered in upper-case hex, then truncated to its
/// first six digits or left-padded with zeros.
pub fn background_hex(name: &str) -> String {
    let mut hex = format!("{:X}", channel_hash(name).unsigned_abs());
    if hex.len() > 6 {
        hex.truncate(6);
    }
    format!("#{:0>6}", hex)
}

/// Derive the color identity of a channel. Deterministic for a given name.
pub fn color_for(name: &str) -> ChannelStyle {
    // background_hex always yields six hex digits
    let background = Rgb::from_hex(&background_hex(name)).unwrap_or(BLACK);
    let foreground = if is_dark(background) { WHITE } else { BLACK };
    ChannelStyle {
        background,
        foreground,
    }
}
