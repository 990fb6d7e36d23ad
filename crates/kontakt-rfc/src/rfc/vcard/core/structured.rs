//! Structured vCard values (RFC 6350).
//!
//! Builders for the N, ADR, ORG and GEO properties, and the fixed field
//! indexes used to read them back.

use super::property::{Property, names};

/// Field indexes of the ADR property (RFC 6350 §6.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    PoBox = 0,
    Extended = 1,
    Street = 2,
    Locality = 3,
    Region = 4,
    PostalCode = 5,
    Country = 6,
}

/// Field indexes of the N property (RFC 6350 §6.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Family = 0,
    Given = 1,
    Additional = 2,
    Prefix = 3,
    Suffix = 4,
}

/// Field indexes of a two-field GEO property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoField {
    Latitude = 0,
    Longitude = 1,
}

impl From<AddressField> for usize {
    fn from(field: AddressField) -> Self {
        field as Self
    }
}

impl From<NameField> for usize {
    fn from(field: NameField) -> Self {
        field as Self
    }
}

impl From<GeoField> for usize {
    fn from(field: GeoField) -> Self {
        field as Self
    }
}

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// Components are stored in wire form. Multiple names in one component are
/// comma separated, e.g. `"Hammond,Hamm"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
    pub additional: String,
    pub prefix: String,
    pub suffix: String,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Reads the components of an N property. Missing trailing fields are
    /// empty.
    #[must_use]
    pub fn from_property(prop: &Property) -> Self {
        let field = |f: NameField| prop.field(f).unwrap_or_default().to_string();
        Self {
            family: field(NameField::Family),
            given: field(NameField::Given),
            additional: field(NameField::Additional),
            prefix: field(NameField::Prefix),
            suffix: field(NameField::Suffix),
        }
    }

    /// Formats as a display name (prefix, given, family).
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.prefix, &self.given, &self.family]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<StructuredName> for Property {
    fn from(name: StructuredName) -> Self {
        Property::with_values(
            names::N,
            [
                name.family,
                name.given,
                name.additional,
                name.prefix,
                name.suffix,
            ],
        )
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub po_box: String,
    /// Extended address (e.g., apartment or suite number).
    pub extended: String,
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Creates a postal address without PO box or extended address.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        locality: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            locality: locality.into(),
            region: region.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Reads the components of an ADR property. Missing trailing fields are
    /// empty.
    #[must_use]
    pub fn from_property(prop: &Property) -> Self {
        let field = |f: AddressField| prop.field(f).unwrap_or_default().to_string();
        Self {
            po_box: field(AddressField::PoBox),
            extended: field(AddressField::Extended),
            street: field(AddressField::Street),
            locality: field(AddressField::Locality),
            region: field(AddressField::Region),
            postal_code: field(AddressField::PostalCode),
            country: field(AddressField::Country),
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .iter()
        .all(|s| s.is_empty())
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl From<Address> for Property {
    fn from(adr: Address) -> Self {
        Property::with_values(
            names::ADR,
            [
                adr.po_box,
                adr.extended,
                adr.street,
                adr.locality,
                adr.region,
                adr.postal_code,
                adr.country,
            ],
        )
    }
}

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub units: Vec<String>,
}

impl Organization {
    /// Creates an organization with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Creates an organization with name and units.
    #[must_use]
    pub fn with_units<I, S>(name: impl Into<String>, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            units: units.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Organization> for Property {
    fn from(org: Organization) -> Self {
        Property::with_values(names::ORG, std::iter::once(org.name).chain(org.units))
    }
}

/// Geographic position as a latitude/longitude field pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reads a two-field GEO property; `None` if a field is missing or not
    /// a number.
    #[must_use]
    pub fn from_property(prop: &Property) -> Option<Self> {
        let latitude = prop.field(GeoField::Latitude).ok()?.trim().parse().ok()?;
        let longitude = prop.field(GeoField::Longitude).ok()?.trim().parse().ok()?;
        Some(Self::new(latitude, longitude))
    }
}

impl From<GeoPosition> for Property {
    fn from(geo: GeoPosition) -> Self {
        Property::with_values(
            names::GEO,
            [geo.latitude.to_string(), geo.longitude.to_string()],
        )
    }
}
