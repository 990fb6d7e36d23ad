//! vCard serialization.

use kontakt_core::config::WriterConfig;
use kontakt_core::constants::{BEGIN_LINE, CRLF, END_LINE, VERSION_PREFIX};

use super::fold::fold_line;
use super::quote::push_param_value;
use crate::rfc::vcard::core::{Card, ParameterMap, Property};

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Properties are written in card order with their raw values. Lines are
/// not folded; see [`serialize_with`].
#[must_use]
pub fn serialize(cards: &[Card]) -> String {
    serialize_with(cards, &WriterConfig::default())
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &Card) -> String {
    let mut output = String::new();
    serialize_card(card, &WriterConfig::default(), &mut output);
    output
}

/// Serializes vCards with the given writer settings.
#[must_use]
pub fn serialize_with(cards: &[Card], config: &WriterConfig) -> String {
    tracing::trace!(count = cards.len(), fold = config.fold_lines, "Serializing vCards");

    let mut output = String::new();
    for card in cards {
        serialize_card(card, config, &mut output);
    }
    output
}

fn serialize_card(card: &Card, config: &WriterConfig, output: &mut String) {
    output.push_str(BEGIN_LINE);
    output.push_str(CRLF);

    output.push_str(VERSION_PREFIX);
    output.push_str(card.version().as_str());
    output.push_str(CRLF);

    for prop in card.properties() {
        let line = serialize_property(prop);
        if config.fold_lines {
            output.push_str(&fold_line(&line, config.max_line_octets));
        } else {
            output.push_str(&line);
        }
        output.push_str(CRLF);
    }

    output.push_str(END_LINE);
    output.push_str(CRLF);
}

/// Serializes one property as a content line without terminator.
///
/// Format: `[group.]NAME[;params]:value[;value]*`
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut output = String::new();

    if let Some(group) = prop.group() {
        output.push_str(group);
        output.push('.');
    }

    output.push_str(prop.name());

    if !prop.parameters().is_empty() {
        output.push(';');
        output.push_str(&serialize_parameters(prop.parameters()));
    }

    output.push(':');
    output.push_str(&prop.value());

    output
}

/// Serializes parameters as `NAME=value` pairs joined by `;`.
#[must_use]
pub fn serialize_parameters(params: &ParameterMap) -> String {
    let mut output = String::new();

    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            output.push(';');
        }
        output.push_str(param.name());
        output.push('=');
        push_param_value(&mut output, param.value());
    }

    output
}
