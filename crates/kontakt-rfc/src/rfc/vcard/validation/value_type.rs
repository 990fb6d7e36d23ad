//! Default value types of registered properties.
//!
//! Markup renderers (xCard, jCard) use this table to pick element and type
//! names. The text engine itself never consults it.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Semantic value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Text,
    Uri,
    Date,
    Timestamp,
    LanguageTag,
    Sex,
}

impl ValueType {
    /// Returns the lowercase tag used by markup formats.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::LanguageTag => "language-tag",
            Self::Sex => "sex",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEFAULT_VALUE_TYPES: &[(&str, ValueType)] = &[
    ("FN", ValueType::Text),
    ("N", ValueType::Text),
    ("ADR", ValueType::Text),
    ("ANNIVERSARY", ValueType::Text),
    ("BDAY", ValueType::Date),
    ("GENDER", ValueType::Sex),
    ("LANG", ValueType::LanguageTag),
    ("REV", ValueType::Timestamp),
    ("TEL", ValueType::Uri),
    ("GEO", ValueType::Uri),
    ("KEY", ValueType::Uri),
    ("URL", ValueType::Uri),
    ("PHOTO", ValueType::Uri),
    ("IMPP", ValueType::Uri),
    ("LOGO", ValueType::Uri),
    ("MEMBER", ValueType::Uri),
    ("RELATED", ValueType::Uri),
    ("SOUND", ValueType::Uri),
    ("UID", ValueType::Uri),
    ("FBURL", ValueType::Uri),
    ("CALADRURI", ValueType::Uri),
    ("CALURI", ValueType::Uri),
    ("SOURCE", ValueType::Uri),
];

static STANDARD: LazyLock<ValueTypeRegistry> = LazyLock::new(|| {
    DEFAULT_VALUE_TYPES
        .iter()
        .map(|(name, value_type)| (*name, *value_type))
        .collect()
});

/// Lookup from canonical property name to its default [`ValueType`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTypeRegistry {
    types: HashMap<String, ValueType>,
}

impl ValueTypeRegistry {
    /// Returns the shared registry of RFC 6350 defaults.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Registers or overrides the value type of a property.
    #[must_use]
    pub fn with(mut self, property: &str, value_type: ValueType) -> Self {
        self.types.insert(property.to_ascii_uppercase(), value_type);
        self
    }

    /// Returns the value type of a property; unknown names are text.
    #[must_use]
    pub fn lookup(&self, property: &str) -> ValueType {
        self.types
            .get(&property.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }
}

impl<'a> FromIterator<(&'a str, ValueType)> for ValueTypeRegistry {
    fn from_iter<I: IntoIterator<Item = (&'a str, ValueType)>>(iter: I) -> Self {
        Self {
            types: iter
                .into_iter()
                .map(|(name, value_type)| (name.to_ascii_uppercase(), value_type))
                .collect(),
        }
    }
}
