//! Delimiter splitting for property values.

/// Splits `text` on `separator`.
///
/// When `escape_aware` is set, a backslash directly followed by the separator
/// is a literal separator: both characters stay in the current field and no
/// split happens there. The result always has one more field than there are
/// splitting separators, so a trailing separator yields a trailing empty field.
#[must_use]
pub fn split(text: &str, separator: char, escape_aware: bool) -> Vec<String> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if escape_aware && c == '\\' {
            if let Some(&(_, next)) = chars.peek()
                && next == separator
            {
                chars.next();
            }
            continue;
        }

        if c == separator {
            fields.push(text[start..i].to_string());
            start = i + c.len_utf8();
        }
    }

    fields.push(text[start..].to_string());
    fields
}

/// Splits a property value into its semicolon-separated fields.
#[must_use]
pub fn split_value(text: &str) -> Vec<String> {
    split(text, ';', true)
}
