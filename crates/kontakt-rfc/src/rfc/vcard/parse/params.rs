//! Parameter segment scanner.
//!
//! Reads the text between a property name and its value separator, e.g.
//! `TYPE=work,voice;PREF=1`.

use kontakt_core::constants::{
    FIELD_SEPARATOR, LIST_SEPARATOR, PARAM_ASSIGNMENT, SORT_AS_PARAM, TYPE_PARAM,
};

use super::scan::closing_quote;
use crate::rfc::vcard::core::ParameterMap;
use crate::rfc::vcard::error::{VCardError, VCardResult};

/// Parameters whose quoted values hold comma-separated lists.
const LIST_VALUED: &[&str] = &[TYPE_PARAM, SORT_AS_PARAM];

const VALUE_DELIMITERS: [char; 2] = [FIELD_SEPARATOR, LIST_SEPARATOR];

/// Parses a parameter segment into a [`ParameterMap`].
///
/// - `;` starts a new parameter, `,` adds another value to the current one.
/// - A value opening with `"` runs to the closing quote; delimiters inside
///   are literal and the quotes are dropped. Text between the closing quote
///   and the next delimiter is ignored.
/// - Quoted `TYPE` and `SORT-AS` values are split on `,` into one entry
///   per item.
/// - A token without `=` is a vCard 2.1 style type, stored as `TYPE=<token>`.
///
/// ## Errors
/// Returns `MalformedParameter` if a quoted value is never closed.
pub fn parse_parameters(segment: &str) -> VCardResult<ParameterMap> {
    let mut params = ParameterMap::new();
    let mut rest = segment;
    let mut current: Option<String> = None;

    while !rest.is_empty() {
        let name = match current.take() {
            Some(name) => name,
            None => match rest.find([PARAM_ASSIGNMENT, FIELD_SEPARATOR, LIST_SEPARATOR]) {
                Some(i) if rest[i..].starts_with(PARAM_ASSIGNMENT) => {
                    let name = rest[..i].trim().to_ascii_uppercase();
                    rest = &rest[i + 1..];
                    name
                }
                found => {
                    let end = found.unwrap_or(rest.len());
                    add_bare_type(&mut params, &rest[..end]);
                    rest = found.map_or("", move |i| &rest[i + 1..]);
                    continue;
                }
            },
        };

        let (value, delimiter, remainder) = read_value(rest, segment)?;
        rest = remainder;

        insert(&mut params, &name, value);

        if delimiter == Some(LIST_SEPARATOR) {
            current = Some(name);
        }
    }

    Ok(params)
}

/// Reads one value and returns it with the delimiter that ended it and the
/// text after that delimiter.
fn read_value<'a>(
    rest: &'a str,
    segment: &str,
) -> VCardResult<(&'a str, Option<char>, &'a str)> {
    let (value, tail) = if rest.starts_with('"') {
        let close = closing_quote(rest).ok_or_else(|| VCardError::MalformedParameter {
            segment: segment.to_string(),
        })?;
        (&rest[1..close], &rest[close + 1..])
    } else {
        let end = rest.find(VALUE_DELIMITERS).unwrap_or(rest.len());
        (&rest[..end], &rest[end..])
    };

    match tail.find(VALUE_DELIMITERS) {
        Some(i) => {
            let delimiter = tail[i..].chars().next();
            Ok((value, delimiter, &tail[i + 1..]))
        }
        None => Ok((value, None, "")),
    }
}

fn insert(params: &mut ParameterMap, name: &str, value: &str) {
    if name.is_empty() {
        tracing::trace!(value, "Dropping parameter value without a name");
        return;
    }

    if LIST_VALUED.contains(&name) {
        for item in value.split(LIST_SEPARATOR) {
            params.add(name, item);
        }
    } else {
        params.add(name, value);
    }
}

fn add_bare_type(params: &mut ParameterMap, token: &str) {
    let token = token.trim();
    if !token.is_empty() {
        params.add(TYPE_PARAM, token);
    }
}
