//! Request parameters
//!
//! A flat, ordered map of string keys to primitive or list values shared by
//! query strings and form bodies. Absent values never make it into the map.

use std::collections::BTreeMap;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain string
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer (identifiers)
    UInt(u64),
    /// Boolean, sent as `1` or `0`
    Bool(bool),
    /// List, sent as repeated `key[]` pairs
    List(Vec<ParamValue>),
}

impl ParamValue {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            ParamValue::Str(s) => out.push((key.to_string(), s.clone())),
            ParamValue::Int(i) => out.push((key.to_string(), i.to_string())),
            ParamValue::UInt(u) => out.push((key.to_string(), u.to_string())),
            ParamValue::Bool(b) => {
                out.push((key.to_string(), String::from(if *b { "1" } else { "0" })));
            }
            ParamValue::List(values) => {
                let list_key = format!("{key}[]");
                for value in values {
                    match value {
                        // Nested lists are flattened under the same key
                        ParamValue::List(_) => value.push_pairs(key, out),
                        _ => value.push_pairs(&list_key, out),
                    }
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(value.into())
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        ParamValue::UInt(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Query or form parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert or replace a parameter in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Check if a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode into wire pairs, in key order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            value.push_pairs(key, &mut pairs);
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_params_scalar_encoding() {
        let params = Params::new()
            .set("flags", 9u8)
            .set("promoted", true)
            .set("self", false)
            .set("vote", -1i64)
            .set("user", "cha0s");

        assert_eq!(
            params.to_pairs(),
            pairs(&[
                ("flags", "9"),
                ("promoted", "1"),
                ("self", "0"),
                ("user", "cha0s"),
                ("vote", "-1"),
            ])
        );
    }

    #[test]
    fn test_params_omit_absent_values() {
        let params = Params::new()
            .opt("tags", None::<String>)
            .opt("older", Some(42u64));

        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("tags"));
        assert_eq!(params.get("older"), Some(&ParamValue::UInt(42)));
    }

    #[test]
    fn test_params_list_encoding() {
        let params = Params::new().set("tags", vec![11u64, 12, 13]);

        assert_eq!(
            params.to_pairs(),
            pairs(&[("tags[]", "11"), ("tags[]", "12"), ("tags[]", "13")])
        );
    }

    #[test]
    fn test_params_insert_replaces() {
        let mut params = Params::new().set("id", 1u64);
        params.insert("id", 2u64);

        assert_eq!(params.to_pairs(), pairs(&[("id", "2")]));
        assert!(Params::new().is_empty());
    }
}
