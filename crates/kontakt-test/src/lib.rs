//! Kontakt vCard engine - integration test support.
//!
//! Fixture documents and small helpers shared by the tests in `tests/`.

pub use kontakt_core as ambient;
pub use kontakt_rfc as rfc;

use kontakt_rfc::rfc::vcard::{Card, parse};

/// Folded vCard 4.0 with a quoted, escaped address label.
pub const FORREST_GUMP: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
N:Gump;Forrest;;Mr.;\r\n\
FN:Forrest Gump\r\n\
ADR;TYPE=HOME;LABEL=\"42 Plantation St.\\nBaytown\\, LA 30314\\nUnited States of America\"\
:;;42\r\n \
Plantation St.;Baytown;LA;30314;United States of America\r\n\
END:VCARD";

/// vCard 2.1 export with bare type parameters and a base64 photo.
pub const LEGACY_V21: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Doe;John\r\n\
FN:John Doe\r\n\
TEL;WORK;VOICE:(111) 555-1212\r\n\
TEL;HOME;VOICE:(404) 555-1212\r\n\
PHOTO;ENCODING=BASE64;TYPE=JPEG:/9j/4AAQSkZJRgABAQEASABIAAD\n \
ZmFrZSBqcGVnIGJ5dGVz\n \
ZW5kIG9mIHBob3Rv\n\
EMAIL;PREF;INTERNET:john.doe@example.com\r\n\
END:VCARD\r\n";

/// Document mixing valid lines with lines the reader must skip.
pub const DAMAGED: &str = "\
garbage before the card\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Damaged Card\r\n\
this line has no separator\r\n\
NOTE;LANGUAGE=\"en:broken\r\n\
ADR;MEDIATYPE=text/plain:;;1 Main St;Town;;;\r\n\
UID:urn:uuid:1\r\n\
UID:urn:uuid:2\r\n\
TEL;TYPE=cell:+1-555-0100\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
FN:Never closed\r\n";

/// Two cards, the second one without a VERSION line.
pub const TWO_CARDS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Alice\r\n\
EMAIL;TYPE=work:alice@example.com\r\n\
EMAIL;TYPE=home:alice@home.example\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
FN:Bob\r\n\
TEL;TYPE=\"voice,cell\":+1-555-0101\r\n\
END:VCARD\r\n";

/// Parses a fixture that must hold exactly one card.
///
/// ## Panics
/// If the document does not hold exactly one card.
#[must_use]
pub fn single_card(input: &str) -> Card {
    let mut cards = parse(input);
    tracing::debug!(count = cards.len(), "Parsed fixture");
    match cards.len() {
        1 => cards.remove(0),
        n => panic!("expected exactly one card, found {n}"),
    }
}
