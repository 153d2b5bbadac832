//! Consistent form field identifiers for server-rendered HTML forms.
//!
//! A [`FormFieldPrefixer`] derives `name`, `id`, `for` and validation keys
//! for form fields from an optional prefix and an optional array key, and
//! repopulates fields from the input of the previous request. Prefixes or
//! array keys written as JavaScript placeholders (`${ index }`) switch the
//! output to template strings and Vue-style binding attributes.
//!
//! ```rust
//! use form_field_prefixer::{FormFieldPrefixer, form_field_prefixer};
//! use serde_json::json;
//!
//! let prefixer = form_field_prefixer("address")
//!     .with_old_input(json!({ "address_street": "Main \"Street\"" }));
//!
//! assert_eq!(prefixer.name("street"), "address_street");
//! assert_eq!(
//!     prefixer.value("street", None).to_string(),
//!     r#"value="Main &quot;Street&quot;""#
//! );
//!
//! let rows = FormFieldPrefixer::make("rows").as_multi_dimensional_array(Some("${ index }"));
//! assert_eq!(rows.name("street"), "`rows[${ index }][street]`");
//! assert_eq!(rows.value("street", None).to_string(), r#"v-model="rows[index]['street']""#);
//! ```

mod attribute;
pub mod config;
mod error;
mod escape;
mod key;
pub mod old_input;
mod prefixer;

pub use attribute::Attribute;
pub use config::PrefixerConfig;
pub use error::{PrefixerError, PrefixerResult};
pub use escape::escape_html_attribute;
pub use key::Key;
pub use old_input::OldInput;
pub use prefixer::FormFieldPrefixer;

/// Create a [`FormFieldPrefixer`] with `prefix`; an empty prefix means no
/// prefix.
#[must_use]
pub fn form_field_prefixer(prefix: &str) -> FormFieldPrefixer {
    FormFieldPrefixer::make(prefix)
}
