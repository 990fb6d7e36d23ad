//! Content line scanner.

use kontakt_core::constants::{
    FIELD_SEPARATOR, GROUP_SEPARATOR, VALUE_SEPARATOR, VERSION_PROPERTY,
};

use super::params::parse_parameters;
use super::scan::find_unquoted;
use super::split::split_value;
use crate::rfc::vcard::core::Property;
use crate::rfc::vcard::error::{VCardError, VCardResult};
use crate::rfc::vcard::validation::ValidationMatrix;

/// Parses one unfolded content line, checking parameters against the
/// standard matrix.
///
/// ## Errors
/// See [`parse_property_with`].
pub fn parse_property(line: &str) -> VCardResult<Property> {
    parse_property_with(line, ValidationMatrix::standard())
}

/// Parses one unfolded content line into a [`Property`].
///
/// Format: `[group.]name[;param=value]*:value[;value]*`
///
/// The value starts after the first `:` outside double quotes. A group is
/// only recognized when the `.` is not the first character of the line.
/// Parameters on `VERSION` are ignored.
///
/// ## Errors
/// - `MissingValueSeparator` if there is no unquoted `:`
/// - `MalformedParameter` if a quoted parameter value is not closed
/// - `ParameterNotAllowed` if `matrix` disallows one of the parameters
pub fn parse_property_with(line: &str, matrix: &ValidationMatrix) -> VCardResult<Property> {
    let colon = find_unquoted(line, VALUE_SEPARATOR).ok_or_else(|| {
        VCardError::MissingValueSeparator {
            line: line.to_string(),
        }
    })?;

    let head = &line[..colon];
    let raw_value = &line[colon + 1..];

    let (head, segment) = match head.find(FIELD_SEPARATOR) {
        Some(i) => (&head[..i], Some(&head[i + 1..])),
        None => (head, None),
    };

    let (group, name) = match head.find(GROUP_SEPARATOR) {
        Some(i) if i > 0 => (Some(&head[..i]), &head[i + 1..]),
        _ => (None, head),
    };

    let mut prop = Property::with_values(name.trim(), split_value(raw_value))
        .in_group(group.map(str::to_string));

    if let Some(segment) = segment
        && !prop.is_named(VERSION_PROPERTY)
    {
        prop.set_parameters_with(parse_parameters(segment)?, matrix)?;
    }

    Ok(prop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_property_with_parameters() {
        let prop = parse_property("grp.TEL;VALUE=uri;TYPE=home:tel:+33-01-23-45-67").unwrap();
        assert_eq!(prop.name(), "TEL");
        assert_eq!(prop.group(), Some("grp"));
        assert_eq!(prop.parameters().len(), 2);
        assert_eq!(prop.value(), "tel:+33-01-23-45-67");
    }

    #[test]
    fn quoted_colon_in_parameter() {
        let prop = parse_property("grp.TEL;VALUE=\"bla : bla\";TYPE=home:tel:+1").unwrap();
        assert_eq!(prop.parameters().len(), 2);
        assert_eq!(prop.parameters().get("VALUE").unwrap(), "bla : bla");
        assert_eq!(prop.value(), "tel:+1");
    }

    #[test]
    fn group_without_parameters() {
        let prop = parse_property("item1.EMAIL:a@example.com").unwrap();
        assert_eq!(prop.group(), Some("item1"));
        assert_eq!(prop.name(), "EMAIL");
        assert!(prop.parameters().is_empty());
    }

    #[test]
    fn leading_dot_is_not_a_group() {
        let prop = parse_property(".FN:x").unwrap();
        assert_eq!(prop.group(), None);
        assert_eq!(prop.name(), ".FN");
    }

    #[test]
    fn dot_in_value_is_not_a_group() {
        let prop = parse_property("URL:http://example.com").unwrap();
        assert_eq!(prop.group(), None);
        assert_eq!(prop.name(), "URL");
        assert_eq!(prop.value(), "http://example.com");
    }

    #[test]
    fn dot_in_parameter_is_not_a_group() {
        let prop = parse_property("TEL;PID=1.1:+1").unwrap();
        assert_eq!(prop.group(), None);
        assert_eq!(prop.name(), "TEL");
    }

    #[test]
    fn escaped_postal_code_stays_intact() {
        let prop =
            parse_property(r"ADR;TYPE=home:;;123 Main Street;Any Town;CA;91921\;-1234;USA")
                .unwrap();
        assert_eq!(prop.values().len(), 7);
        assert_eq!(prop.value_at(5).unwrap(), r"91921\;-1234");
    }

    #[test]
    fn missing_colon() {
        let err = parse_property("FN John").unwrap_err();
        assert!(matches!(err, VCardError::MissingValueSeparator { .. }));
    }

    #[test]
    fn disallowed_parameter_is_rejected() {
        let err = parse_property("ADR;MEDIATYPE=text/plain:;;x;;;;").unwrap_err();
        assert_eq!(
            err,
            VCardError::ParameterNotAllowed {
                property: "ADR".to_string(),
                parameter: "MEDIATYPE".to_string(),
            }
        );
    }

    #[test]
    fn tel_uri_with_mediatype() {
        let prop = parse_property("TEL;VALUE=uri;MEDIATYPE=audio/x-tel:tel:+1-555-0100").unwrap();
        assert_eq!(prop.parameters().get("MEDIATYPE").unwrap(), "audio/x-tel");
        assert_eq!(prop.value(), "tel:+1-555-0100");
    }

    #[test]
    fn permissive_matrix_keeps_parameter() {
        let prop = parse_property_with(
            "ADR;MEDIATYPE=text/plain:;;x;;;;",
            &ValidationMatrix::permissive(),
        )
        .unwrap();
        assert!(prop.parameters().contains("MEDIATYPE"));
    }

    #[test]
    fn version_parameters_are_skipped() {
        let prop = parse_property("VERSION;X-FOO=\"bar\":3.0").unwrap();
        assert!(prop.parameters().is_empty());
        assert_eq!(prop.value(), "3.0");
    }

    #[test]
    fn name_is_canonicalized() {
        let prop = parse_property("fn:Forrest Gump").unwrap();
        assert_eq!(prop.name(), "FN");
    }
}
