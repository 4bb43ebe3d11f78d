//! Extraction behaviour over whole vCard streams.

use cardtext_rfc::error::RfcError;
use cardtext_rfc::rfc::vcard::{ContactReader, NameComponent, ParseErrorKind, parse, parse_reader};
use cardtext_test::fixtures::{ANDROID_EXPORT, APPLE_EXPORT, numbered_records};

#[test_log::test]
fn one_contact_per_terminated_record_in_order() {
    for count in [0, 1, 2, 17] {
        let contacts = parse(&numbered_records(count)).unwrap();
        assert_eq!(contacts.len(), count);
        for (i, contact) in contacts.iter().enumerate() {
            assert_eq!(
                contact.formatted_name.as_deref(),
                Some(format!("Contact {}", i + 1).as_str())
            );
        }
    }
}

#[test_log::test]
fn unterminated_record_still_yields_contact() {
    let contacts = parse("BEGIN:VCARD\nVERSION:3.0\nFN:Half Done\nTEL;CELL:123").unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].formatted_name.as_deref(), Some("Half Done"));
    assert_eq!(contacts[0].phone_numbers["mobile number"], "123");
}

#[test_log::test]
fn unterminated_record_without_fields_yields_nothing() {
    assert!(parse("BEGIN:VCARD\nVERSION:3.0\n").unwrap().is_empty());
}

#[test_log::test]
fn structured_name_maps_positionally() {
    let contacts = parse("BEGIN:VCARD\nN:Doe;John;M;;\nEND:VCARD\n").unwrap();
    let parts = contacts[0].name_parts.as_ref().unwrap();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[&NameComponent::LastName], "Doe");
    assert_eq!(parts[&NameComponent::FirstName], "John");
    assert_eq!(parts[&NameComponent::MiddleName], "M");
    assert!(parts.get(&NameComponent::HonorificPrefix).is_none());
    assert!(parts.get(&NameComponent::HonorificSuffix).is_none());
}

#[test_log::test]
fn duplicate_mobile_numbers_are_disambiguated() {
    let contacts =
        parse("BEGIN:VCARD\nTEL;CELL:(555) 123-4567\nTEL;CELL:(555) 765-4321\nEND:VCARD\n").unwrap();
    let phones = &contacts[0].phone_numbers;

    assert_eq!(phones.len(), 2);
    assert_eq!(phones["mobile number"], "555 1234567");
    assert_eq!(phones["mobile number2"], "555 7654321");
}

#[test_log::test]
fn email_tags_build_label() {
    let contacts = parse("BEGIN:VCARD\nEMAIL;HOME;pref:a@example.com\nEND:VCARD\n").unwrap();
    assert_eq!(
        contacts[0].email_addresses["home preferred address"],
        "a@example.com"
    );
}

#[test_log::test]
fn revision_timestamp_is_readable() {
    let contacts = parse("BEGIN:VCARD\nREV:20230101T120000Z\nEND:VCARD\n").unwrap();
    assert_eq!(
        contacts[0].revision_date.as_deref(),
        Some("20230101, 120000 UTC")
    );
}

#[test_log::test]
fn note_line_breaks_become_placeholders() {
    let contacts = parse("BEGIN:VCARD\nNOTE:Line1\\nLine2\nEND:VCARD\n").unwrap();
    assert_eq!(contacts[0].notes.as_deref(), Some("Line1 newline Line2"));
}

#[test_log::test]
fn unsupported_charset_aborts_the_whole_run() {
    let input = format!(
        "{}BEGIN:VCARD\nN;CHARSET=ISO-8859-1:Doe;John\nEND:VCARD\n{}",
        numbered_records(2),
        numbered_records(3)
    );

    let err = parse(&input).unwrap_err();
    let parse_err = err.as_parse_error().unwrap();
    assert_eq!(parse_err.kind, ParseErrorKind::UnsupportedCharset);
    assert_eq!(parse_err.line, 10);
    assert_eq!(parse_err.contact.as_deref(), Some("Doe;John"));

    let mut reader = ContactReader::new(input.as_bytes());
    assert_eq!(reader.by_ref().take_while(Result::is_ok).count(), 2);
    assert!(reader.next().is_none());
}

#[test_log::test]
fn invalid_utf8_is_replaced_not_fatal() {
    let input: &[u8] = b"BEGIN:VCARD\r\nFN:Ren\xe9e\r\nNOTE:caf\xc3\r\nEND:VCARD\r\nBEGIN:VCARD\r\nFN:Next\r\nEND:VCARD\r\n";
    let contacts = parse_reader(input).unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].formatted_name.as_deref(), Some("Ren\u{fffd}e"));
    assert_eq!(contacts[0].notes.as_deref(), Some("caf\u{fffd}"));
}

#[test_log::test]
fn parsing_twice_gives_identical_contacts() {
    let first = parse(ANDROID_EXPORT).unwrap();
    let second = parse(ANDROID_EXPORT).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn android_export() {
    let contacts = parse(ANDROID_EXPORT).unwrap();
    assert_eq!(contacts.len(), 2);

    let giorgos = &contacts[0];
    assert_eq!(giorgos.first_name(), Some("Γιώργος"));
    assert_eq!(giorgos.last_name(), Some("Παπαδόπουλος"));
    assert_eq!(giorgos.phone_numbers["mobile number"], "+30 690 000 0000");
    assert_eq!(giorgos.phone_numbers["home number"], "2101234567");
    assert_eq!(giorgos.email_addresses["home address"], "giorgos@example.gr");
}

#[test_log::test]
fn apple_export_with_grouped_properties() {
    let contacts = parse(APPLE_EXPORT).unwrap();
    let jane = &contacts[0];

    assert_eq!(jane.formatted_name.as_deref(), Some("Jane Roe"));
    assert_eq!(jane.nickname.as_deref(), Some("JJ"));
    assert_eq!(jane.title.as_deref(), Some("Manager"));
    assert_eq!(jane.organization.as_deref(), Some("Initech;"));
    assert_eq!(jane.image_type.as_deref(), Some("JPEG"));
    assert_eq!(jane.phone_numbers["preferred number"], "+1 555 0100000");
    assert_eq!(jane.phone_numbers["number"], "5550100001");
    assert_eq!(
        jane.email_addresses["preferred work address"],
        "jane@initech.test"
    );
}

#[test_log::test]
fn nickname_overrides_structured_name() {
    // NICKNAME also starts with N, so the name rule applies to it as well.
    let contacts = parse(APPLE_EXPORT).unwrap();
    assert_eq!(contacts[0].last_name(), Some("JJ"));
    assert_eq!(contacts[0].first_name(), None);
}

#[test_log::test]
fn io_errors_are_not_parse_errors() {
    let err = RfcError::from(std::io::Error::other("boom"));
    assert!(err.as_parse_error().is_none());
}
