//! Identifier composition.
//!
//! An identifier is built from up to three segments:
//!
//! 1. the base: the field name, the prefix alone (multi-dimensional, or
//!    keyed by field name) or `prefix_field`;
//! 2. the array key, as `[key]` or `_key`; a prefixer grouped by field
//!    name uses the field itself as the key;
//! 3. the field name again, as a second array level (multi-dimensional
//!    with a prefix only).
//!
//! Dynamic prefixers wrap the result in backticks so it can be used as a
//! JavaScript template string.

use super::{ArrayKey, FormFieldPrefixer};
use crate::key::quoted_index;

impl FormFieldPrefixer {
    /// The `name` of field `name`, using array syntax when grouped.
    #[must_use]
    pub fn name(&self, name: &str) -> String {
        self.build_identifier(name, self.is_array(), &self.config.separator)
    }

    /// The `id` of field `id`.
    #[must_use]
    pub fn id(&self, id: &str) -> String {
        self.build_identifier(id, false, &self.config.separator)
    }

    /// The `for` target of a label for field `name`; identical to
    /// [`id`](Self::id).
    #[must_use]
    pub fn label_for(&self, name: &str) -> String {
        self.id(name)
    }

    /// The validation key of field `key`.
    ///
    /// Array segments are joined with the validation separator (`.`) so the
    /// key addresses the nested input; flat keys use the regular separator.
    #[must_use]
    pub fn validation_key(&self, key: &str) -> String {
        let separator = if self.is_array() || self.is_dynamic() {
            &self.config.validation_separator
        } else {
            &self.config.separator
        };
        self.build_identifier(key, false, separator)
    }

    fn build_identifier(&self, name: &str, use_array_syntax: bool, separator: &str) -> String {
        let mut identifier = self.base_name(name);

        if let Some(key) = self.array_key_text(name) {
            push_array_segment(&mut identifier, key, use_array_syntax, separator);
        }
        if self.nests_field_name() {
            push_array_segment(&mut identifier, name, use_array_syntax, separator);
        }

        if self.is_dynamic() {
            format!("`{identifier}`")
        } else {
            identifier
        }
    }

    fn base_name(&self, name: &str) -> String {
        match &self.prefix {
            None => name.to_owned(),
            Some(prefix) if self.groups_under_prefix() => prefix.source().to_owned(),
            Some(prefix) => format!("{}{}{name}", prefix.source(), self.config.separator),
        }
    }

    fn array_key_text<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        match &self.array_key {
            ArrayKey::None => None,
            ArrayKey::FieldName => Some(name),
            ArrayKey::Key(key) => Some(key.source()),
        }
    }

    /// The JavaScript property path bound by `v-model` for field `name`.
    ///
    /// Prefixes contribute their expression, dynamic array keys index with
    /// their expression (`[index]`) and literal segments index with a quoted
    /// string (`['abc']`).
    ///
    /// The path is returned as is. [`value`](Self::value) and
    /// [`select`](Self::select) escape its double quotes when rendering it
    /// into an attribute.
    #[must_use]
    pub fn binding_expression(&self, name: &str) -> String {
        let mut expression = match &self.prefix {
            None => name.to_owned(),
            Some(prefix) if self.groups_under_prefix() => prefix.expression().to_owned(),
            Some(prefix) => format!("{}{}{name}", prefix.expression(), self.config.separator),
        };

        match &self.array_key {
            ArrayKey::None => {}
            ArrayKey::FieldName => expression.push_str(&quoted_index(name)),
            ArrayKey::Key(key) => expression.push_str(&key.binding_index()),
        }
        if self.nests_field_name() {
            expression.push_str(&quoted_index(name));
        }

        expression
    }
}

fn push_array_segment(identifier: &mut String, value: &str, use_array_syntax: bool, separator: &str) {
    if use_array_syntax {
        identifier.push('[');
        identifier.push_str(value);
        identifier.push(']');
    } else {
        identifier.push_str(separator);
        identifier.push_str(value);
    }
}
