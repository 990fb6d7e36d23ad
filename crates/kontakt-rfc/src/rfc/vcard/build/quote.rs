//! Parameter value quoting.

use kontakt_core::constants::{FIELD_SEPARATOR, LIST_SEPARATOR, VALUE_SEPARATOR};

/// Returns whether a parameter value must be wrapped in double quotes.
#[must_use]
pub fn needs_quotes(value: &str) -> bool {
    value.contains([VALUE_SEPARATOR, FIELD_SEPARATOR, LIST_SEPARATOR])
}

/// Writes a parameter value, quoting it when it holds a delimiter.
pub fn push_param_value(output: &mut String, value: &str) {
    if needs_quotes(value) {
        output.push('"');
        output.push_str(value);
        output.push('"');
    } else {
        output.push_str(value);
    }
}
