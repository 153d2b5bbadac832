//! Flashed old input for repopulation tests.
//!
//! Mirrors how a web framework stores the previous request's input: keys
//! may be dotted (`prefix.arrayKey.abc`) and are expanded into nested
//! objects, so the resulting value has the shape the form submitted.
//!
//! # Examples
//!
//! ```
//! use form_field_prefixer_test_helpers::session::FlashedInput;
//! use serde_json::json;
//!
//! let input = FlashedInput::new()
//!     .flash("prefix.arrayKey.abc", "test value")
//!     .into_value();
//! assert_eq!(input, json!({ "prefix": { "arrayKey": { "abc": "test value" } } }));
//! ```

use serde_json::{Map, Value};

/// Builder for the input flashed by a previous request.
#[derive(Debug, Clone, Default)]
pub struct FlashedInput {
    input: Map<String, Value>,
}

impl FlashedInput {
    /// Start with no flashed input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flash `value` under the dotted `key`, creating intermediate objects.
    ///
    /// Scalars on the path are replaced by objects.
    #[must_use]
    pub fn flash(mut self, key: &str, value: impl Into<Value>) -> Self {
        insert_path(&mut self.input, key, value.into());
        self
    }

    /// Flash an explicit `null` under `key`.
    #[must_use]
    pub fn flash_null(self, key: &str) -> Self {
        self.flash(key, Value::Null)
    }

    /// The flashed input as a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.input)
    }
}

fn insert_path(map: &mut Map<String, Value>, key: &str, value: Value) {
    let Some((head, rest)) = key.split_once('.') else {
        map.insert(key.to_owned(), value);
        return;
    };
    let entry = map
        .entry(head.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(child) = entry {
        insert_path(child, rest, value);
    }
}
