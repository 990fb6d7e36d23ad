//! Property/parameter validation matrix.
//!
//! Decides which parameters a property may carry and which properties may
//! appear only once per card. The standard matrix is derived from the
//! property definitions of RFC 6350 §6.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::rfc::vcard::core::{Parameter, ParameterMap};

/// Parameters registered by RFC 6350 §5.
///
/// Only these can be disallowed by the standard matrix. Extension and legacy
/// parameters (`X-…`, `CHARSET`, `ENCODING`) always pass.
pub const REGISTERED_PARAMETERS: &[&str] = &[
    "LANGUAGE",
    "VALUE",
    "PREF",
    "ALTID",
    "PID",
    "TYPE",
    "MEDIATYPE",
    "CALSCALE",
    "SORT-AS",
    "GEO",
    "TZ",
    "LABEL",
];

/// Properties limited to one instance unless every instance carries ALTID.
pub const SINGLE_INSTANCE_PROPERTIES: &[&str] = &[
    "ANNIVERSARY",
    "BDAY",
    "GENDER",
    "KIND",
    "N",
    "PRODID",
    "REV",
    "UID",
    "FN",
];

const URI_LIKE: &[&str] = &["VALUE", "PID", "PREF", "TYPE", "MEDIATYPE", "ALTID"];

/// Parameters each registered property accepts (RFC 6350 §6).
const PROPERTY_PARAMETERS: &[(&str, &[&str])] = &[
    // General
    ("SOURCE", &["VALUE", "PID", "PREF", "ALTID", "MEDIATYPE"]),
    ("KIND", &["VALUE"]),
    ("XML", &["VALUE", "ALTID"]),
    // Identification
    ("FN", &["VALUE", "TYPE", "LANGUAGE", "ALTID", "PID", "PREF"]),
    ("N", &["VALUE", "SORT-AS", "LANGUAGE", "ALTID"]),
    ("NICKNAME", &["VALUE", "TYPE", "LANGUAGE", "ALTID", "PID", "PREF"]),
    ("PHOTO", &["VALUE", "ALTID", "TYPE", "MEDIATYPE", "PREF", "PID"]),
    ("BDAY", &["VALUE", "LANGUAGE", "ALTID", "CALSCALE"]),
    ("ANNIVERSARY", &["VALUE", "ALTID", "CALSCALE"]),
    ("GENDER", &["VALUE"]),
    // Delivery addressing
    (
        "ADR",
        &[
            "VALUE", "LABEL", "LANGUAGE", "GEO", "TZ", "ALTID", "PID", "PREF", "TYPE",
        ],
    ),
    // Communications
    ("TEL", &["VALUE", "TYPE", "PID", "PREF", "ALTID", "MEDIATYPE"]),
    ("EMAIL", &["VALUE", "PID", "PREF", "TYPE", "ALTID"]),
    ("IMPP", URI_LIKE),
    ("LANG", &["VALUE", "PID", "PREF", "ALTID", "TYPE"]),
    // Geographical
    ("TZ", URI_LIKE),
    ("GEO", URI_LIKE),
    // Organizational
    ("TITLE", &["VALUE", "LANGUAGE", "PID", "PREF", "ALTID", "TYPE"]),
    ("ROLE", &["VALUE", "LANGUAGE", "PID", "PREF", "ALTID", "TYPE"]),
    (
        "LOGO",
        &["VALUE", "LANGUAGE", "PID", "PREF", "TYPE", "MEDIATYPE", "ALTID"],
    ),
    (
        "ORG",
        &["VALUE", "SORT-AS", "LANGUAGE", "PID", "PREF", "ALTID", "TYPE"],
    ),
    ("MEMBER", &["VALUE", "PID", "PREF", "ALTID", "MEDIATYPE"]),
    (
        "RELATED",
        &["VALUE", "TYPE", "LANGUAGE", "MEDIATYPE", "PID", "PREF", "ALTID"],
    ),
    // Explanatory
    ("CATEGORIES", &["VALUE", "PID", "PREF", "TYPE", "ALTID"]),
    ("NOTE", &["VALUE", "LANGUAGE", "PID", "PREF", "TYPE", "ALTID"]),
    ("PRODID", &["VALUE"]),
    ("REV", &["VALUE"]),
    (
        "SOUND",
        &["VALUE", "LANGUAGE", "PID", "PREF", "TYPE", "MEDIATYPE", "ALTID"],
    ),
    ("UID", &["VALUE"]),
    ("CLIENTPIDMAP", &[]),
    ("URL", URI_LIKE),
    // Security
    ("KEY", URI_LIKE),
    // Calendar
    ("FBURL", URI_LIKE),
    ("CALADRURI", URI_LIKE),
    ("CALURI", URI_LIKE),
];

static STANDARD: LazyLock<ValidationMatrix> = LazyLock::new(ValidationMatrix::rfc6350);

/// Immutable table of parameter and cardinality rules.
///
/// Lookups are total: a property the matrix does not know has no disallowed
/// parameters and no cardinality limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMatrix {
    disallowed: HashMap<String, HashSet<String>>,
    single_instance: HashSet<String>,
}

impl ValidationMatrix {
    /// Creates a matrix with no rules at all.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Returns the shared RFC 6350 matrix.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds the RFC 6350 matrix.
    ///
    /// Each registered property disallows every registered parameter its
    /// definition does not list.
    #[must_use]
    pub fn rfc6350() -> Self {
        let mut matrix = Self::permissive();

        for (property, allowed) in PROPERTY_PARAMETERS {
            let disallowed = REGISTERED_PARAMETERS
                .iter()
                .filter(|param| !allowed.contains(*param))
                .copied();
            matrix = matrix.with_disallowed(property, disallowed);
        }

        for name in SINGLE_INSTANCE_PROPERTIES {
            matrix = matrix.with_single_instance(name);
        }

        matrix
    }

    /// Adds parameters the given property must not carry.
    #[must_use]
    pub fn with_disallowed<I, S>(mut self, property: &str, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disallowed
            .entry(property.to_ascii_uppercase())
            .or_default()
            .extend(parameters.into_iter().map(|p| p.as_ref().to_ascii_uppercase()));
        self
    }

    /// Marks a property as single-instance unless ALTID-tagged.
    #[must_use]
    pub fn with_single_instance(mut self, property: &str) -> Self {
        self.single_instance.insert(property.to_ascii_uppercase());
        self
    }

    /// Returns whether the property may carry the named parameter.
    #[must_use]
    pub fn allows(&self, property: &str, parameter: &str) -> bool {
        self.disallowed
            .get(&property.to_ascii_uppercase())
            .is_none_or(|set| !set.contains(&parameter.to_ascii_uppercase()))
    }

    /// Returns the first parameter in `params` the property may not carry.
    #[must_use]
    pub fn first_disallowed<'a>(
        &self,
        property: &str,
        params: &'a ParameterMap,
    ) -> Option<&'a str> {
        let set = self.disallowed.get(&property.to_ascii_uppercase())?;
        params
            .iter()
            .map(Parameter::name)
            .find(|name| set.contains(&name.to_ascii_uppercase()))
    }

    /// Returns false iff any parameter name in `params` is disallowed for
    /// the property.
    #[must_use]
    pub fn is_allowed(&self, property: &str, params: &ParameterMap) -> bool {
        self.first_disallowed(property, params).is_none()
    }

    /// Returns whether the property is limited to one instance per card.
    #[must_use]
    pub fn is_single_instance(&self, property: &str) -> bool {
        self.single_instance.contains(&property.to_ascii_uppercase())
    }
}
