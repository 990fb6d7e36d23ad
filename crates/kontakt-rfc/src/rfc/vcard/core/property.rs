//! vCard property type (RFC 6350).

use chrono::NaiveDate;
use kontakt_core::constants::{ALTID_PARAM, PREF_PARAM, TYPE_PARAM};

use super::parameter::ParameterMap;
use crate::rfc::vcard::error::{VCardError, VCardResult};
use crate::rfc::vcard::parse::split::split_value;
use crate::rfc::vcard::validation::ValidationMatrix;

/// A vCard property.
///
/// Values are kept in wire form: escapes are not decoded, so serializing
/// the property reproduces its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    group: Option<String>,
    name: String,
    values: Vec<String>,
    params: ParameterMap,
}

impl Property {
    /// Creates a property from a raw value, splitting it on unescaped `;`.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_value: &str) -> Self {
        Self::with_values(name, split_value(raw_value))
    }

    /// Creates a grouped property from a raw value. An empty group is
    /// dropped.
    #[must_use]
    pub fn grouped(group: impl Into<String>, name: impl Into<String>, raw_value: &str) -> Self {
        Self::new(name, raw_value).in_group(Some(group.into()))
    }

    /// Creates a property from already-split values.
    #[must_use]
    pub fn with_values<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            values: values.into_iter().map(Into::into).collect(),
            params: ParameterMap::new(),
        }
    }

    /// Creates a `BDAY` property with an ISO 8601 date value.
    #[must_use]
    pub fn birthday(date: NaiveDate) -> Self {
        Self::with_values(names::BDAY, [date.format("%Y-%m-%d").to_string()])
    }

    /// Sets or clears the group label.
    #[must_use]
    pub fn in_group(mut self, group: Option<String>) -> Self {
        self.group = group.filter(|g| !g.is_empty());
        self
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value fields in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterMap {
        &self.params
    }

    /// Returns the raw value, fields joined with `;`.
    #[must_use]
    pub fn value(&self) -> String {
        self.values.join(";")
    }

    /// Returns the value field at `index`.
    ///
    /// ## Errors
    /// Returns `IndexOutOfRange` if the property has fewer fields.
    pub fn value_at(&self, index: usize) -> VCardResult<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or(VCardError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Returns a structured field, e.g. `AddressField::Region`.
    ///
    /// ## Errors
    /// Returns `IndexOutOfRange` if the property has fewer fields.
    pub fn field(&self, field: impl Into<usize>) -> VCardResult<&str> {
        self.value_at(field.into())
    }

    /// Appends one parameter after checking it against the standard matrix.
    ///
    /// ## Errors
    /// Returns `ParameterNotAllowed` if the property may not carry `name`.
    pub fn add_parameter(&mut self, name: &str, value: impl Into<String>) -> VCardResult<()> {
        self.add_parameter_with(name, value, ValidationMatrix::standard())
    }

    /// Appends one parameter after checking it against `matrix`.
    ///
    /// ## Errors
    /// Returns `ParameterNotAllowed` if the property may not carry `name`.
    pub fn add_parameter_with(
        &mut self,
        name: &str,
        value: impl Into<String>,
        matrix: &ValidationMatrix,
    ) -> VCardResult<()> {
        if !matrix.allows(&self.name, name) {
            return Err(VCardError::ParameterNotAllowed {
                property: self.name.clone(),
                parameter: name.to_ascii_uppercase(),
            });
        }
        self.params.add(name, value);
        Ok(())
    }

    /// Replaces all parameters after checking them against the standard
    /// matrix.
    ///
    /// ## Errors
    /// Returns `ParameterNotAllowed` for the first disallowed entry; the
    /// current parameters are kept in that case.
    pub fn set_parameters(&mut self, params: ParameterMap) -> VCardResult<()> {
        self.set_parameters_with(params, ValidationMatrix::standard())
    }

    /// Replaces all parameters after checking them against `matrix`.
    ///
    /// ## Errors
    /// Returns `ParameterNotAllowed` for the first disallowed entry; the
    /// current parameters are kept in that case.
    pub fn set_parameters_with(
        &mut self,
        params: ParameterMap,
        matrix: &ValidationMatrix,
    ) -> VCardResult<()> {
        if let Some(parameter) = matrix.first_disallowed(&self.name, &params) {
            return Err(VCardError::ParameterNotAllowed {
                property: self.name.clone(),
                parameter: parameter.to_string(),
            });
        }
        self.params = params;
        Ok(())
    }

    /// Returns whether the property carries an ALTID parameter.
    #[must_use]
    pub fn has_altid(&self) -> bool {
        self.params.contains(ALTID_PARAM)
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .values(TYPE_PARAM)
            .any(|v| v.eq_ignore_ascii_case(type_value))
    }

    /// Returns the PREF value if present (1-100, lower is preferred).
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.params.first(PREF_PARAM).and_then(|v| v.parse().ok())
    }

    /// Returns whether the name matches, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Common property names as constants.
pub mod names {
    // Identification properties
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";
    pub const GENDER: &str = "GENDER";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const IMPP: &str = "IMPP";
    pub const LANG: &str = "LANG";

    // Geographical
    pub const TZ: &str = "TZ";
    pub const GEO: &str = "GEO";

    // Organizational
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const ORG: &str = "ORG";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const SOUND: &str = "SOUND";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";

    pub const KIND: &str = "KIND";
}
