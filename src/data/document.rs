// src/data/document.rs

//! Render a nested key/value structure as a readable YAML document, the
//! "rendered document" printed in reports.
//!
//! Keys are emitted in lexicographic order at every nesting level; arrays
//! keep their order. Rendering the same structure built in different
//! insertion orders produces identical text.

use crate::data::logrecord::{Map, Value};
use crate::de_err;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Rebuild `value` with every object's keys inserted in sorted order.
///
/// Does not rely on the `Map` implementation being a `BTreeMap`.
pub fn value_sorted(value: &Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut keys: Vec<&String> = object.keys().collect();
            keys.sort();
            let mut sorted: Map<String, Value> = Map::new();
            for key in keys {
                if let Some(val) = object.get(key) {
                    sorted.insert(key.clone(), value_sorted(val));
                }
            }

            Value::Object(sorted)
        }
        Value::Array(array) => Value::Array(array.iter().map(value_sorted).collect()),
        _ => value.clone(),
    }
}

/// Render `value` as a YAML document.
///
/// A rendering failure is not fatal; it is `None` and the caller prints an
/// empty document.
pub fn render_document(value: &Value) -> Option<String> {
    defn!();
    match serde_yaml::to_string(&value_sorted(value)) {
        Ok(s) => {
            defx!("rendered {} bytes", s.len());

            Some(s)
        }
        Err(_err) => {
            de_err!("serde_yaml::to_string() failed {}", _err);
            defx!("return None");

            None
        }
    }
}

/// Render the object `map` as a YAML document. See [`render_document`].
pub fn render_map(map: &Map<String, Value>) -> Option<String> {
    render_document(&Value::Object(map.clone()))
}
