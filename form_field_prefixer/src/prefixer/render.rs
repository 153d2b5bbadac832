//! Attribute rendering, old input repopulation and option selection.

use serde_json::Value;

use super::FormFieldPrefixer;
use crate::attribute::Attribute;
use crate::escape::{escape_double_quotes, escape_html_attribute};
use crate::old_input::{display_text, loosely_equals};

const VALUE_ATTRIBUTE: &str = "value";

impl FormFieldPrefixer {
    /// Wrap `value` in an attribute named `attribute`.
    ///
    /// Dynamic prefixers bind the attribute instead: `value` becomes the
    /// binding attribute (`v-model`) and any other name `x` becomes `:x`.
    #[must_use]
    pub fn attribute(&self, attribute: &str, value: impl Into<String>) -> Attribute {
        if !self.is_dynamic() {
            return Attribute::new(attribute, value);
        }
        let bound = if attribute == VALUE_ATTRIBUTE {
            self.config.binding_attribute.clone()
        } else {
            format!("{}{attribute}", self.config.bound_attribute_prefix)
        };
        Attribute::new(bound, value)
    }

    /// `name="…"` for field `name`.
    #[must_use]
    pub fn name_attribute(&self, name: &str) -> Attribute {
        self.attribute("name", self.name(name))
    }

    /// `id="…"` for field `id`.
    #[must_use]
    pub fn id_attribute(&self, id: &str) -> Attribute {
        self.attribute("id", self.id(id))
    }

    /// `for="…"` for a label targeting field `name`.
    #[must_use]
    pub fn for_attribute(&self, name: &str) -> Attribute {
        self.attribute("for", self.label_for(name))
    }

    /// `value="…"` for field `name`, repopulated from old input.
    ///
    /// Dynamic prefixers render `v-model="…"` with the field's
    /// [binding expression](Self::binding_expression) instead.
    #[must_use]
    pub fn value(&self, name: &str, default: Option<&str>) -> Attribute {
        self.value_as(name, default, VALUE_ATTRIBUTE)
    }

    /// Like [`value`](Self::value), rendered into `attribute`.
    #[must_use]
    pub fn value_as(&self, name: &str, default: Option<&str>, attribute: &str) -> Attribute {
        self.attribute(attribute, self.raw_value(name, default))
    }

    /// The escaped old value of field `name`, or its binding expression when
    /// dynamic.
    ///
    /// A submitted value wins over `default`, even when it was `null`.
    #[must_use]
    pub fn raw_value(&self, name: &str, default: Option<&str>) -> String {
        if self.is_dynamic() {
            return escape_double_quotes(&self.binding_expression(name)).into_owned();
        }
        self.current_value(name, default)
            .map_or_else(String::new, |value| {
                escape_html_attribute(&display_text(&value)).into_owned()
            })
    }

    /// `selected="selected"` when the current value of field `name` loosely
    /// equals `option`.
    ///
    /// Dynamic prefixers never select statically; bind the `<select>` with
    /// [`select`](Self::select) instead.
    #[must_use]
    pub fn selected(&self, name: &str, option: &str, default: Option<&str>) -> Option<Attribute> {
        if self.is_dynamic() {
            return None;
        }
        let current = self.current_value(name, default).unwrap_or(Value::Null);
        loosely_equals(&current, option).then(|| Attribute::new("selected", "selected"))
    }

    /// The binding attribute for a `<select>` element.
    ///
    /// Static prefixers need none, so this is `None` unless dynamic.
    #[must_use]
    pub fn select(&self, name: &str) -> Option<Attribute> {
        self.is_dynamic()
            .then(|| self.attribute(VALUE_ATTRIBUTE, self.raw_value(name, None)))
    }

    fn current_value(&self, name: &str, default: Option<&str>) -> Option<Value> {
        let key = self.validation_key(name);
        self.old_input
            .as_ref()
            .and_then(|input| input.get(&key))
            .or_else(|| {
                tracing::trace!(%key, has_default = default.is_some(), "no old input for field");
                default.map(|text| Value::String(text.to_owned()))
            })
    }
}
