//! vCard container type.

use super::property::{Property, names};
use super::version::VCardVersion;
use crate::rfc::vcard::error::{VCardError, VCardResult};
use crate::rfc::vcard::validation::ValidationMatrix;

/// A complete vCard.
///
/// Properties keep their insertion order, which is also the output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    version: VCardVersion,
    properties: Vec<Property>,
}

impl Card {
    /// Creates an empty vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn version(&self) -> VCardVersion {
        self.version
    }

    pub fn set_version(&mut self, version: VCardVersion) {
        self.version = version;
    }

    /// Appends a property after the standard cardinality check.
    ///
    /// ## Errors
    /// Returns `CardinalityViolation` if a single-instance property is added
    /// again and the instances are not ALTID alternates.
    pub fn add_property(&mut self, prop: Property) -> VCardResult<()> {
        self.add_property_with(prop, ValidationMatrix::standard())
    }

    /// Appends a property after checking cardinality against `matrix`.
    ///
    /// A repeated single-instance property is accepted only when it carries
    /// ALTID and at least one existing instance does too.
    ///
    /// ## Errors
    /// Returns `CardinalityViolation`; the card is unchanged.
    pub fn add_property_with(
        &mut self,
        prop: Property,
        matrix: &ValidationMatrix,
    ) -> VCardResult<()> {
        if matrix.is_single_instance(prop.name()) {
            let mut existing = self.properties_named(prop.name()).peekable();
            if existing.peek().is_some() {
                let alternates = prop.has_altid() && existing.any(Property::has_altid);
                if !alternates {
                    return Err(VCardError::CardinalityViolation {
                        name: prop.name().to_string(),
                    });
                }
            }
        }

        self.properties.push(prop);
        Ok(())
    }

    /// Removes every property with the given name.
    pub fn remove_property(&mut self, name: &str) {
        self.properties.retain(|p| !p.is_named(name));
    }

    /// Returns all properties in order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns every property with the given name, in order.
    pub fn properties_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a Property> + use<'a, 'n> {
        self.properties.iter().filter(move |p| p.is_named(name))
    }

    /// Returns the first property with the given name.
    ///
    /// ## Errors
    /// Returns `NotFound` if the card has no such property.
    pub fn property(&self, name: &str) -> VCardResult<&Property> {
        self.properties_named(name)
            .next()
            .ok_or_else(|| VCardError::property_not_found(name.to_ascii_uppercase()))
    }

    /// Returns the property at `index`.
    ///
    /// ## Errors
    /// Returns `IndexOutOfRange` if the card has fewer properties.
    pub fn property_at(&self, index: usize) -> VCardResult<&Property> {
        self.properties.get(index).ok_or(VCardError::IndexOutOfRange {
            index,
            len: self.properties.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the FN (formatted name) value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<String> {
        self.property(names::FN).ok().map(Property::value)
    }

    /// Returns the UID value.
    #[must_use]
    pub fn uid(&self) -> Option<String> {
        self.property(names::UID).ok().map(Property::value)
    }

    /// Returns all EMAIL values.
    #[must_use]
    pub fn emails(&self) -> Vec<String> {
        self.properties_named(names::EMAIL).map(Property::value).collect()
    }

    /// Returns all TEL values.
    #[must_use]
    pub fn telephones(&self) -> Vec<String> {
        self.properties_named(names::TEL).map(Property::value).collect()
    }
}
