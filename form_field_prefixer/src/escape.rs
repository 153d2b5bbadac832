//! HTML escaping for values interpolated into attributes.

use std::borrow::Cow;

/// Escape a string for safe insertion into a double- or single-quoted HTML
/// attribute value.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities and borrows the
/// input unchanged when none of them occur.
///
/// ```rust
/// use form_field_prefixer::escape_html_attribute;
///
/// assert_eq!(escape_html_attribute(r#"test "value""#), "test &quot;value&quot;");
/// assert_eq!(escape_html_attribute("plain"), "plain");
/// ```
#[must_use]
pub fn escape_html_attribute(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut output = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
    Cow::Owned(output)
}

/// Escape only `&` and `"`, keeping a JavaScript expression readable inside
/// a double-quoted attribute.
#[must_use]
pub(crate) fn escape_double_quotes(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '"']) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace('&', "&amp;").replace('"', "&quot;"))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use rstest::rstest;

    use super::{escape_double_quotes, escape_html_attribute};

    #[rstest]
    #[case(r#"test "value""#, "test &quot;value&quot;")]
    #[case("<script>", "&lt;script&gt;")]
    #[case("fish & chips", "fish &amp; chips")]
    #[case("it's", "it&#039;s")]
    #[case("&amp;", "&amp;amp;")]
    fn escapes_special_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html_attribute(input), expected);
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(escape_html_attribute("plain value"), Cow::Borrowed(_)));
    }

    #[rstest]
    #[case("prefix[arrayKey]['abc']", "prefix[arrayKey]['abc']")]
    #[case(r#"x"y[i]"#, "x&quot;y[i]")]
    #[case("a && b", "a &amp;&amp; b")]
    fn escapes_quotes_in_expressions(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_double_quotes(input), expected);
    }
}
