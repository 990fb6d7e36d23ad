//! Record model tests against the public API.

use chrono::NaiveDate;
use kontakt_rfc::rfc::vcard::{
    Address, AddressField, Card, GeoPosition, Organization, Parameter, ParameterMap, Property,
    StructuredName, ValidationMatrix, VCardError, parse_parameters, parse_property, split,
};

#[test_log::test]
fn value_splitter_cases() {
    assert_eq!(split("a;b", ';', true), vec!["a", "b"]);
    assert_eq!(split(r"a\;b", ';', true), vec![r"a\;b"]);
    assert_eq!(split("a,b,", ',', false), vec!["a", "b", ""]);
}

#[test_log::test]
fn parameter_scanner_cases() {
    assert_eq!(parse_parameters("TYPE=work;PREF=1;zz=zz").unwrap().len(), 3);

    let quoted = parse_parameters("TYPE=\"work,home\";PREF=1").unwrap();
    assert_eq!(quoted.len(), 3);
    assert_eq!(quoted.count("TYPE"), 2);

    let mixed = parse_parameters("VALUE=\"Name, 1\",name2,\"name; three, two3\";PREF=2").unwrap();
    assert_eq!(mixed.len(), 4);
}

#[test_log::test]
fn property_scanner_cases() {
    let prop = parse_property("grp.TEL;VALUE=uri;TYPE=home:tel:+33-01-23-45-67").unwrap();
    assert_eq!(prop.name(), "TEL");
    assert_eq!(prop.group(), Some("grp"));
    assert_eq!(prop.parameters().len(), 2);

    let adr = parse_property(
        r"ADR;TYPE=dom,home,postal,parcel:;;123 Main Street;Any Town;Region;91921\;-1234;USA",
    )
    .unwrap();
    assert_eq!(adr.field(AddressField::PostalCode).unwrap(), r"91921\;-1234");
    assert_eq!(adr.parameters().count("TYPE"), 4);
}

#[test_log::test]
fn bday_cardinality() {
    let mut card = Card::new();
    let date = NaiveDate::from_ymd_opt(2000, 12, 30).unwrap();
    card.add_property(Property::birthday(date)).unwrap();

    let err = card.add_property(Property::new("BDAY", "2001-01-01")).unwrap_err();
    assert_eq!(
        err,
        VCardError::CardinalityViolation {
            name: "BDAY".to_string()
        }
    );

    let mut tagged = Card::new();
    for value in ["2000-12-30", "circa 2000"] {
        let mut bday = Property::new("BDAY", value);
        bday.add_parameter("ALTID", "1").unwrap();
        tagged.add_property(bday).unwrap();
    }
    assert_eq!(tagged.len(), 2);
}

#[test_log::test]
fn adr_rejects_mediatype() {
    let mut adr = Property::from(Address::new("1 Main St", "Town", "CA", "12345", "USA"));
    let params: ParameterMap = [Parameter::type_param("home"), Parameter::mediatype("text/plain")]
        .into_iter()
        .collect();

    let err = adr.set_parameters(params).unwrap_err();
    assert_eq!(
        err,
        VCardError::ParameterNotAllowed {
            property: "ADR".to_string(),
            parameter: "MEDIATYPE".to_string(),
        }
    );
    assert!(adr.parameters().is_empty());
}

#[test_log::test]
fn custom_matrix_by_reference() {
    let matrix = ValidationMatrix::rfc6350()
        .with_disallowed("X-SKYPE", ["PREF"])
        .with_single_instance("X-SKYPE");

    let mut card = Card::new();
    let mut skype = Property::new("X-SKYPE", "forrest");
    assert!(skype.add_parameter_with("PREF", "1", &matrix).is_err());
    skype.add_parameter_with("TYPE", "work", &matrix).unwrap();

    card.add_property_with(skype.clone(), &matrix).unwrap();
    assert!(card.add_property_with(skype.clone(), &matrix).is_err());
    card.add_property(skype).unwrap();
    assert_eq!(card.len(), 2);
}

#[test_log::test]
fn structured_builders() {
    let adr = Property::from(Address::new("Lane 5 ", "Detroit", "Nevada", "112233", "USA"));
    assert!(adr.value().ends_with("Detroit;Nevada;112233;USA"));

    let org = Property::from(Organization::with_units("Gooogle", ["HR", "ssk"]));
    assert_eq!(org.value(), "Gooogle;HR;ssk");

    let n = Property::from(StructuredName::simple("Gump", "Forrest").with_prefix("Mr."));
    assert_eq!(n.value(), "Gump;Forrest;;Mr.;");

    let geo = Property::from(GeoPosition::new(29.75, -94.98));
    assert_eq!(geo.value(), "29.75;-94.98");
}

#[test_log::test]
fn card_accessors_and_removal() {
    let mut card = Card::new();
    card.add_property(Property::new("FN", "Forrest Gump")).unwrap();
    card.add_property(Property::new("EMAIL", "forrest@example.com")).unwrap();
    card.add_property(Property::new("TEL", "+1-111-555-1212")).unwrap();
    card.add_property(Property::new("EMAIL", "gump@example.com")).unwrap();

    assert_eq!(card.emails().len(), 2);
    assert_eq!(card.property_at(2).unwrap().name(), "TEL");

    card.remove_property("EMAIL");
    assert_eq!(card.len(), 2);
    assert_eq!(
        card.property("email"),
        Err(VCardError::property_not_found("EMAIL"))
    );
    assert_eq!(
        card.property_at(5),
        Err(VCardError::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[test_log::test]
fn parameter_map_operations() {
    let mut params = ParameterMap::new();
    params.add("TYPE", "home");
    params.add("TYPE", "work");
    params.add("LANGUAGE", "en");

    assert_eq!(params.len(), 3);
    assert_eq!(params.count("type"), 2);
    assert_eq!(params.get("LANGUAGE").unwrap(), "en");
    assert_eq!(params.values("TYPE").collect::<Vec<_>>(), vec!["home", "work"]);

    params.set("TYPE", "cell");
    assert_eq!(params.count("TYPE"), 1);
    params.remove("LANGUAGE");
    assert!(params.get("LANGUAGE").is_err());
}
