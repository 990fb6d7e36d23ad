//! vCard test fixtures.
//!
//! Examples taken from RFC 6350 and from exports of common address books.

/// RFC 6350 §7 - Author's vCard example
pub const VCARD_AUTHOR: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
TEL;VALUE=uri;TYPE=work,voice;PREF=1:tel:+1-418-656-9254;ext=102\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n";

/// Basic vCard 4.0
pub const VCARD_BASIC: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
N:Doe;John;;;\r\n\
EMAIL:john.doe@example.com\r\n\
TEL:+1-555-555-5555\r\n\
END:VCARD\r\n";

/// vCard 3.0 with a folded address and a label
pub const VCARD_FORREST: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Gump;Forrest;;Mr.;\r\n\
FN:Forrest Gump\r\n\
ADR;TYPE=work:;;100 Waters Edge;Baytown;\r\n LA;30314;United States of America\r\n\
LABEL;TYPE=WORK:\"100 Waters Edge, Baytown, LA 30314\"\r\n\
END:VCARD\r\n";

/// Apple-style grouped properties
pub const VCARD_GROUPED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Jane Smith\r\n\
item1.EMAIL;TYPE=INTERNET:jane@example.com\r\n\
item1.X-ABLabel:Work\r\n\
item2.TEL;TYPE=CELL;TYPE=pref:+1-555-0100\r\n\
item2.X-ABLabel:Mobile\r\n\
END:VCARD\r\n";

/// Two cards in one document
pub const VCARD_MULTIPLE: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Alice\r\n\
UID:urn:uuid:alice\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Bob\r\n\
UID:urn:uuid:bob\r\n\
END:VCARD\r\n";

/// ALTID alternates of single-instance properties
pub const VCARD_ALTID: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN;ALTID=1;LANGUAGE=ja:山田太郎\r\n\
FN;ALTID=1;LANGUAGE=en:Taro Yamada\r\n\
N;ALTID=1;LANGUAGE=ja:山田;太郎;;;\r\n\
N;ALTID=1;LANGUAGE=en:Yamada;Taro;;;\r\n\
END:VCARD\r\n";
