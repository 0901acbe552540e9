// src/internal/config/trace_channels.rs

use regex::Regex;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// Entry that force-enables every channel.
pub const WILDCARD: &str = "*";

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("static separator pattern"));

/// Channels for which every severity, TRACE included, is always emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TraceChannels(BTreeSet<String>);

impl TraceChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every channel is covered.
    pub fn all() -> Self {
        Self::from_names([WILDCARD])
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Parse a list separated by commas and/or whitespace, e.g. `"Foo, Bar Baz"`.
    pub fn parse(list: &str) -> Self {
        Self::from_names(LIST_SEPARATOR.split(list))
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.contains(WILDCARD)
    }

    /// True if the wildcard or `channel` itself is in the set.
    pub fn covers(&self, channel: &str) -> bool {
        self.is_wildcard() || self.0.contains(channel)
    }

    pub fn insert(&mut self, channel: impl Into<String>) {
        let channel = channel.into();
        let channel = channel.trim();
        if !channel.is_empty() {
            self.0.insert(channel.to_string());
        }
    }

    pub fn extend(&mut self, other: TraceChannels) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for TraceChannels {
    fn from(list: &str) -> Self {
        Self::parse(list)
    }
}

impl From<Vec<String>> for TraceChannels {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<&[&str]> for TraceChannels {
    fn from(names: &[&str]) -> Self {
        Self::from_names(names)
    }
}

impl<const N: usize> From<[&str; N]> for TraceChannels {
    fn from(names: [&str; N]) -> Self {
        Self::from_names(names)
    }
}

impl FromIterator<String> for TraceChannels {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::from_names(iter)
    }
}

// Environment variables arrive as one string, files usually as a list. Either
// may carry bare numbers or booleans once the config layer has typed them.
impl<'de> Deserialize<'de> for TraceChannels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChannelsVisitor)
    }
}

struct ChannelsVisitor;

impl<'de> Visitor<'de> for ChannelsVisitor {
    type Value = TraceChannels;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a channel list as a string or a sequence of names")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(TraceChannels::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(TraceChannels::from_names([v.to_string()]))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(TraceChannels::from_names([v.to_string()]))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(TraceChannels::from_names([v.to_string()]))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(TraceChannels::from_names([v.to_string()]))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TraceChannels::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(TraceChannels::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut names = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(ChannelName(name)) = seq.next_element()? {
            names.push(name);
        }
        Ok(TraceChannels::from_names(names))
    }
}

/// One list element, stringified when it arrives as a number or boolean.
struct ChannelName(String);

impl<'de> Deserialize<'de> for ChannelName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = ChannelName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a channel name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ChannelName(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ChannelName(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ChannelName(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ChannelName(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ChannelName(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ChannelName(v.to_string()))
            }
        }

        deserializer.deserialize_any(NameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_mixed_separators() {
        let channels = TraceChannels::parse("a, b  c,d");
        assert_eq!(channels.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input_is_empty_set() {
        assert!(TraceChannels::parse("").is_empty());
        assert!(TraceChannels::parse(" , ").is_empty());
    }

    #[test]
    fn test_wildcard_covers_everything() {
        let channels = TraceChannels::all();
        assert!(channels.is_wildcard());
        assert!(channels.covers("AnyComponent"));
        assert!(channels.covers(""));
    }

    #[test]
    fn test_explicit_names_cover_only_themselves() {
        let channels = TraceChannels::from(["PersonService"]);
        assert!(channels.covers("PersonService"));
        assert!(!channels.covers("personservice"));
        assert!(!channels.covers("Other"));
    }

    #[test]
    fn test_deserialize_from_string_or_list() {
        let from_string: TraceChannels = serde_json::from_str("\"a,b\"").unwrap();
        let from_list: TraceChannels = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(from_string, from_list);
        assert_eq!(serde_json::to_string(&from_list).unwrap(), "[\"a\",\"b\"]");
    }

    #[test]
    fn test_deserialize_numeric_names() {
        let from_list: TraceChannels = serde_json::from_str("[\"Search\", 404, true]").unwrap();
        assert!(from_list.covers("Search"));
        assert!(from_list.covers("404"));
        assert!(from_list.covers("true"));

        let from_scalar: TraceChannels = serde_json::from_str("404").unwrap();
        assert_eq!(from_scalar.iter().collect::<Vec<_>>(), vec!["404"]);
    }

    #[test]
    fn test_insert_trims_names() {
        let mut channels = TraceChannels::new();
        channels.insert(" A ");
        channels.insert("   ");
        assert_eq!(channels.len(), 1);
        assert!(channels.covers("A"));
    }
}
