//! Access to previously submitted ("old") form input.
//!
//! The host application owns the session that stores the input of the last
//! request. [`OldInput`] is the seam through which a
//! [`FormFieldPrefixer`](crate::FormFieldPrefixer) reads it, keyed by the
//! validation key of a field (`prefix_abc`, `prefix.arrayKey.abc`, ...).
//!
//! Implementations are provided for `serde_json` values, which resolve
//! dotted keys against nested objects and arrays, and for flat string maps.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Lookup of old input values by validation key.
///
/// `None` means no value was submitted under `key`. A submitted `null` is
/// returned as `Some(Value::Null)` and still takes precedence over a
/// field's default value.
pub trait OldInput: Send + Sync {
    /// Return the value submitted under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;
}

impl OldInput for Value {
    fn get(&self, key: &str) -> Option<Value> {
        lookup(self, key).cloned()
    }
}

impl OldInput for Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        self.get(key)
            .or_else(|| {
                let (head, rest) = key.split_once('.')?;
                self.get(head).and_then(|value| lookup(value, rest))
            })
            .cloned()
    }
}

impl<S> OldInput for HashMap<String, String, S>
where
    S: BuildHasher + Send + Sync,
{
    fn get(&self, key: &str) -> Option<Value> {
        Self::get(self, key).cloned().map(Value::String)
    }
}

impl OldInput for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<Value> {
        Self::get(self, key).cloned().map(Value::String)
    }
}

/// Resolve a dotted `key` against `input`.
///
/// An exact match on an object key wins, so keys that themselves contain
/// dots stay addressable. Otherwise each segment descends into an object
/// member or, when numeric, an array element.
///
/// ```rust
/// use form_field_prefixer::old_input::lookup;
/// use serde_json::json;
///
/// let input = json!({ "prefix": { "arrayKey": { "abc": "test value" } } });
/// assert_eq!(lookup(&input, "prefix.arrayKey.abc"), Some(&json!("test value")));
/// assert_eq!(lookup(&input, "prefix.missing"), None);
/// ```
#[must_use]
pub fn lookup<'a>(input: &'a Value, key: &str) -> Option<&'a Value> {
    if let Some(found) = input.as_object().and_then(|map| map.get(key)) {
        return Some(found);
    }
    key.split('.')
        .try_fold(input, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        })
}

/// The text an old value renders as inside an attribute.
///
/// `null` and `false` render empty, `true` renders `1`. Arrays and objects
/// have no scalar form and render empty.
#[must_use]
pub fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Null | Value::Bool(false) | Value::Array(_) | Value::Object(_) => {
            Cow::Borrowed("")
        }
    }
}

/// Loosely compare an old value with an option value.
///
/// Follows the comparison form frameworks apply when re-selecting options:
/// numeric strings compare by value (`"1.0"` equals `"1"`), `null` equals
/// the empty string, booleans compare by truthiness, and arrays or objects
/// never match.
#[must_use]
pub fn loosely_equals(value: &Value, other: &str) -> bool {
    match value {
        Value::Null => other.is_empty(),
        Value::Bool(flag) => *flag == is_truthy(other),
        Value::Number(number) => match (number.as_f64(), numeric(other)) {
            (Some(left), Some(right)) => numbers_equal(left, right),
            _ => number.to_string() == other,
        },
        Value::String(text) => match (numeric(text), numeric(other)) {
            (Some(left), Some(right)) => numbers_equal(left, right),
            _ => text == other,
        },
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn is_truthy(text: &str) -> bool {
    !(text.is_empty() || text == "0")
}

fn numbers_equal(left: f64, right: f64) -> bool {
    left.partial_cmp(&right) == Some(Ordering::Equal)
}

/// Parse `text` when it is a plain decimal or exponent number.
///
/// Rejects the `inf`/`NaN` spellings `f64::from_str` would accept.
fn numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let plain = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'));
    if !plain {
        return None;
    }
    trimmed.parse().ok()
}
