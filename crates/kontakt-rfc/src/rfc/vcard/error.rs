//! vCard error types.

use thiserror::Error;

/// Result type for vCard scanning and record-model operations.
pub type VCardResult<T> = Result<T, VCardError>;

/// An error raised while scanning a line or mutating a record.
///
/// Scanner errors (`MalformedParameter`, `MissingValueSeparator`) are local
/// to one logical line. Record-model errors are raised before any mutation
/// takes place, so the target is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VCardError {
    /// A quoted parameter value was opened but never closed.
    #[error("unterminated quoted value in parameters `{segment}`")]
    MalformedParameter { segment: String },

    /// No unquoted `:` separates the property head from its value.
    #[error("missing value separator in line `{line}`")]
    MissingValueSeparator { line: String },

    /// A single-instance property was added again without ALTID tagging.
    #[error("property {name} is already present and the instances are not ALTID alternates")]
    CardinalityViolation { name: String },

    /// The property may not carry the named parameter.
    #[error("parameter {parameter} is not allowed on property {property}")]
    ParameterNotAllowed { property: String, parameter: String },

    /// Positional access past the end of a sequence.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A property or parameter lookup found no match.
    #[error("{kind} {name} not found")]
    NotFound { kind: LookupKind, name: String },
}

impl VCardError {
    /// Creates a `NotFound` error for a property lookup.
    #[must_use]
    pub fn property_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: LookupKind::Property,
            name: name.into(),
        }
    }

    /// Creates a `NotFound` error for a parameter lookup.
    #[must_use]
    pub fn parameter_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: LookupKind::Parameter,
            name: name.into(),
        }
    }

    /// Returns whether the error comes from scanning a single line.
    #[must_use]
    pub fn is_scan_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedParameter { .. } | Self::MissingValueSeparator { .. }
        )
    }
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Property,
    Parameter,
    Card,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Parameter => write!(f, "parameter"),
            Self::Card => write!(f, "vCard"),
        }
    }
}
