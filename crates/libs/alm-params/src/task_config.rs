//! The string-keyed configuration mapping handed to the launcher.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered, unique-key mapping of launcher configuration entries.
///
/// Keys are unique: a later [`set`](TaskConfiguration::set) for an existing
/// key overwrites the value in place and never duplicates the entry.
/// Iteration follows insertion order, so the serialized form is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskConfiguration {
    entries: Vec<(String, String)>,
}

impl TaskConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key to a value, overwriting any existing entry for that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value stored for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an entry exists for a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for TaskConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders the launcher's props-file format: one `key=value` line per entry.
impl fmt::Display for TaskConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let mut config = TaskConfiguration::new();
        config.set("AlmServerUrl", "http://first");
        config.set("AlmDomain", "DEFAULT");
        config.set("AlmServerUrl", "http://second");

        assert_eq!(config.len(), 2);
        assert_eq!(config.get("AlmServerUrl"), Some("http://second"));
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["AlmServerUrl", "AlmDomain"]);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut config = TaskConfiguration::new();
        config.set("RunType", "AlmLabManagement");
        config.set("AlmRunHost", "localhost");

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"RunType":"AlmLabManagement","AlmRunHost":"localhost"}"#);
    }

    #[test]
    fn displays_key_value_lines() {
        let mut config = TaskConfiguration::new();
        config.set("AlmRunMode", "RUN_LOCAL");
        config.set("AlmRunHost", "localhost");

        assert_eq!(config.to_string(), "AlmRunMode=RUN_LOCAL\nAlmRunHost=localhost\n");
    }
}
