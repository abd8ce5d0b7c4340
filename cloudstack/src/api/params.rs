//! Query parameter encoding for CloudStack commands

use std::collections::{BTreeMap, HashMap};

/// Wire layout of a map-valued parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEncoding {
    /// `name[i].key=<k>&name[i].value=<v>`, one index per entry
    KeyValue,
    /// `name[0].<k>=<v>`, every entry under index 0
    Dotted,
}

/// Encoded parameters of a single command.
///
/// Keys are kept sorted, so the same logical input always encodes to the
/// same query string. Only values that were explicitly added are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    params: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    pub fn add_optional<K: Into<String>, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.params.insert(key.into(), v.to_string());
        }
        self
    }

    /// Comma-joined list, emitted even when the list is empty.
    pub fn add_optional_list<K: Into<String>>(mut self, key: K, values: Option<&[String]>) -> Self {
        if let Some(values) = values {
            self.params.insert(key.into(), values.join(","));
        }
        self
    }

    pub fn add_optional_map(
        mut self,
        key: &str,
        map: Option<&HashMap<String, String>>,
        encoding: MapEncoding,
    ) -> Self {
        let Some(map) = map else {
            return self;
        };

        for (i, k) in sorted_keys(map).into_iter().enumerate() {
            let v = &map[k];
            match encoding {
                MapEncoding::KeyValue => {
                    self.params.insert(format!("{}[{}].key", key, i), k.clone());
                    self.params.insert(format!("{}[{}].value", key, i), v.clone());
                }
                MapEncoding::Dotted => {
                    self.params.insert(format!("{}[0].{}", key, k), v.clone());
                }
            }
        }
        self
    }

    /// `name[i].<k>=<v>` for the i-th map of the list.
    pub fn add_optional_map_list(
        mut self,
        key: &str,
        maps: Option<&[HashMap<String, String>]>,
    ) -> Self {
        let Some(maps) = maps else {
            return self;
        };

        for (i, map) in maps.iter().enumerate() {
            for k in sorted_keys(map) {
                self.params
                    .insert(format!("{}[{}].{}", key, i, k), map[k].clone());
            }
        }
        self
    }

    /// Insert or overwrite a value in place.
    pub fn set<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.params.insert(key.into(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Sorted key/value pairs, unencoded, ready for a form body or query.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// `k=v&...` in key order with percent-encoded values (spaces as `%20`).
    /// This is the string the request signature is computed over.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Split a comma-joined list value back into its items.
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}

fn sorted_keys(map: &HashMap<String, String>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}
