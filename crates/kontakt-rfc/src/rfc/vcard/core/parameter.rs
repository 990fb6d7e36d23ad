//! vCard parameter types.

use kontakt_core::constants::{ALTID_PARAM, PREF_PARAM, SORT_AS_PARAM, TYPE_PARAM};

use crate::rfc::vcard::error::{VCardError, VCardResult};

/// A single parameter entry.
///
/// Multi-valued parameters such as `TYPE=home,work` are stored as one entry
/// per value. The name is always upper case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(TYPE_PARAM, value)
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::new(PREF_PARAM, priority.to_string())
    }

    /// Creates an ALTID parameter for grouping alternate representations.
    #[must_use]
    pub fn altid(id: impl Into<String>) -> Self {
        Self::new(ALTID_PARAM, id)
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new("LANGUAGE", tag)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }

    /// Creates a PID parameter.
    #[must_use]
    pub fn pid(id: impl Into<String>) -> Self {
        Self::new("PID", id)
    }

    /// Creates a SORT-AS parameter.
    #[must_use]
    pub fn sort_as(value: impl Into<String>) -> Self {
        Self::new(SORT_AS_PARAM, value)
    }

    /// Creates a CALSCALE parameter.
    #[must_use]
    pub fn calscale(value: impl Into<String>) -> Self {
        Self::new("CALSCALE", value)
    }

    /// Creates a GEO parameter (for ADR property).
    #[must_use]
    pub fn geo(uri: impl Into<String>) -> Self {
        Self::new("GEO", uri)
    }

    /// Creates a TZ parameter (for ADR property).
    #[must_use]
    pub fn tz(value: impl Into<String>) -> Self {
        Self::new("TZ", value)
    }

    /// Creates a LABEL parameter (formatted address text).
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::new("LABEL", text)
    }

    /// Creates a MEDIATYPE parameter.
    #[must_use]
    pub fn mediatype(value: impl Into<String>) -> Self {
        Self::new("MEDIATYPE", value)
    }
}

/// Parameters of one property.
///
/// A multi-map from canonical parameter name to value that keeps entries in
/// insertion order. A name may repeat, e.g. one `TYPE` entry per type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: Vec<Parameter>,
}

impl ParameterMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries with the given name.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.values(name).count()
    }

    /// Returns whether at least one entry has the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Appends an entry, keeping any existing entries of the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Parameter::new(name, value));
    }

    /// Appends an already-built entry.
    pub fn push(&mut self, param: Parameter) {
        self.entries.push(param);
    }

    /// Replaces every entry of the given name with a single entry.
    ///
    /// The new entry takes the position of the first replaced entry, or goes
    /// to the end if the name was absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let param = Parameter::new(name, value);
        match self.entries.iter().position(|p| p.name == param.name) {
            Some(first) => {
                let name = param.name.clone();
                self.entries[first] = param;
                let mut index = 0;
                self.entries.retain(|p| {
                    let keep = index <= first || p.name != name;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push(param),
        }
    }

    /// Removes every entry of the given name.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    /// Returns the value of the first entry with the given name.
    ///
    /// ## Errors
    /// Returns `NotFound` if no entry has that name.
    pub fn get(&self, name: &str) -> VCardResult<&str> {
        self.first(name)
            .ok_or_else(|| VCardError::parameter_not_found(name.to_ascii_uppercase()))
    }

    /// Returns the value of the first entry with the given name, if any.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).next()
    }

    /// Returns the values of every entry with the given name, in order.
    pub fn values<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'n> {
        self.entries
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    /// Returns the distinct parameter names, in order of first appearance.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in &self.entries {
            if !names.contains(&p.name.as_str()) {
                names.push(&p.name);
            }
        }
        names
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ParameterMap {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Parameter> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Parameter> for ParameterMap {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Common TYPE values as constants.
pub mod types {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";

    pub const TEXT: &str = "text";
    pub const VOICE: &str = "voice";
    pub const FAX: &str = "fax";
    pub const CELL: &str = "cell";
    pub const VIDEO: &str = "video";
    pub const PAGER: &str = "pager";
    pub const TEXTPHONE: &str = "textphone";

    // vCard 2.1/3.0 address types
    pub const DOM: &str = "dom";
    pub const INTL: &str = "intl";
    pub const POSTAL: &str = "postal";
    pub const PARCEL: &str = "parcel";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParameterMap {
        let mut params = ParameterMap::new();
        params.add("TYPE", "home");
        params.add("type", "work");
        params.add("LANGUAGE", "en");
        params
    }

    #[test]
    fn parameter_name_is_uppercased() {
        let param = Parameter::new("type", "home");
        assert_eq!(param.name(), "TYPE");
        assert_eq!(param.value(), "home");
    }

    #[test]
    fn pref_parameter() {
        let param = Parameter::pref(1);
        assert_eq!(param.name(), "PREF");
        assert_eq!(param.value(), "1");
    }

    #[test]
    fn map_counts_repeated_names() {
        let params = sample();
        assert_eq!(params.len(), 3);
        assert_eq!(params.count("TYPE"), 2);
        assert_eq!(params.get("LANGUAGE").unwrap(), "en");
        assert!(params.contains("language"));
    }

    #[test]
    fn set_replaces_all_entries_of_a_name() {
        let mut params = sample();
        params.set("TYPE", "fax");
        assert_eq!(params.len(), 2);
        assert_eq!(params.values("TYPE").collect::<Vec<_>>(), vec!["fax"]);
        assert_eq!(params.names(), vec!["TYPE", "LANGUAGE"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut params = sample();
        params.add("TYPE", "voice");
        params.remove("TYPE");
        assert_eq!(params.len(), 1);

        params.clear();
        assert!(params.is_empty());
    }

    #[test]
    fn get_missing_is_not_found() {
        let params = sample();
        assert_eq!(
            params.get("pref"),
            Err(VCardError::parameter_not_found("PREF"))
        );
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let params = sample();
        let names: Vec<&str> = params.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["TYPE", "TYPE", "LANGUAGE"]);
    }
}
