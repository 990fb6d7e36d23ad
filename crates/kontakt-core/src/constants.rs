//! Wire tokens of the vCard text format shared across crates.

/// Line terminator used on output.
pub const CRLF: &str = "\r\n";

pub const VCARD_OBJECT: &str = "VCARD";
pub const BEGIN_PROPERTY: &str = "BEGIN";
pub const END_PROPERTY: &str = "END";
pub const VERSION_PROPERTY: &str = "VERSION";

/// Separates the property name and parameters from the value.
pub const VALUE_SEPARATOR: char = ':';
/// Separates parameters from each other and values from each other.
pub const FIELD_SEPARATOR: char = ';';
/// Separates multiple values of one parameter.
pub const LIST_SEPARATOR: char = ',';
/// Separates a group label from the property name.
pub const GROUP_SEPARATOR: char = '.';
/// Separates a parameter name from its value.
pub const PARAM_ASSIGNMENT: char = '=';

pub const BEGIN_LINE: &str = const_str::concat!(BEGIN_PROPERTY, ":", VCARD_OBJECT);
pub const END_LINE: &str = const_str::concat!(END_PROPERTY, ":", VCARD_OBJECT);
pub const VERSION_PREFIX: &str = const_str::concat!(VERSION_PROPERTY, ":");

/// Parameter tagging alternate representations of one property.
pub const ALTID_PARAM: &str = "ALTID";
pub const TYPE_PARAM: &str = "TYPE";
pub const SORT_AS_PARAM: &str = "SORT-AS";
pub const PREF_PARAM: &str = "PREF";

/// Default maximum line length in octets when output folding is enabled.
pub const DEFAULT_MAX_LINE_OCTETS: usize = 75;
