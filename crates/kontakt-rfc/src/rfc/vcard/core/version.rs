//! vCard version tags.

/// vCard version.
///
/// Only the `VERSION` line of a document decides the version. Tokens other
/// than `2.1` and `3.0`, and documents without a `VERSION` line, are 4.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1.
    V2_1,
    /// vCard 3.0 (RFC 2426).
    V3_0,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4_0,
}

impl VCardVersion {
    /// Maps a version token to a version, falling back to 4.0.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "2.1" => Self::V2_1,
            "3.0" => Self::V3_0,
            _ => Self::V4_0,
        }
    }

    /// Returns the version token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens() {
        assert_eq!(VCardVersion::from_token("2.1"), VCardVersion::V2_1);
        assert_eq!(VCardVersion::from_token(" 3.0 "), VCardVersion::V3_0);
        assert_eq!(VCardVersion::from_token("4.0"), VCardVersion::V4_0);
    }

    #[test]
    fn unknown_token_is_v4() {
        assert_eq!(VCardVersion::from_token("5.0"), VCardVersion::V4_0);
        assert_eq!(VCardVersion::from_token(""), VCardVersion::V4_0);
    }

    #[test]
    fn display() {
        assert_eq!(VCardVersion::V3_0.to_string(), "3.0");
        assert_eq!(VCardVersion::default().as_str(), "4.0");
    }
}
