//! The contact extracted from one `BEGIN:VCARD` ... `END:VCARD` record.

use indexmap::IndexMap;

use super::name::{NameComponent, NameParts};

/// A single contact.
///
/// Every field is optional. Phone numbers and e-mail addresses are keyed by a
/// descriptive label ("mobile number", "preferred work address") that is
/// unique within the contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Display name (`FN`).
    pub formatted_name: Option<String>,
    /// Structured name (`N`). Present, possibly empty, once an `N` line was seen.
    pub name_parts: Option<NameParts>,
    pub nickname: Option<String>,
    pub title: Option<String>,
    /// Photo format hint (`X-IMAGETYPE`).
    pub image_type: Option<String>,
    pub organization: Option<String>,
    /// Birthday, verbatim.
    pub birthday: Option<String>,
    /// Revision timestamp made readable, e.g. `20230101, 120000 UTC`.
    pub revision_date: Option<String>,
    /// Notes with escaped line breaks replaced by `" newline "`.
    pub notes: Option<String>,
    pub phone_numbers: IndexMap<String, String>,
    pub email_addresses: IndexMap<String, String>,
}

impl Contact {
    /// Creates an empty contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether anything at all was recorded for this contact.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.formatted_name.is_some()
            || self.name_parts.is_some()
            || self.nickname.is_some()
            || self.title.is_some()
            || self.image_type.is_some()
            || self.organization.is_some()
            || self.birthday.is_some()
            || self.revision_date.is_some()
            || self.notes.is_some()
            || !self.phone_numbers.is_empty()
            || !self.email_addresses.is_empty()
    }

    /// Returns one component of the structured name.
    #[must_use]
    pub fn name_part(&self, component: NameComponent) -> Option<&str> {
        self.name_parts
            .as_ref()
            .and_then(|parts| parts.get(&component))
            .map(String::as_str)
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name_part(NameComponent::FirstName)
    }

    #[must_use]
    pub fn middle_name(&self) -> Option<&str> {
        self.name_part(NameComponent::MiddleName)
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.name_part(NameComponent::LastName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contact_has_no_content() {
        assert!(!Contact::new().has_content());
    }

    #[test]
    fn empty_name_parts_still_count_as_content() {
        let contact = Contact {
            name_parts: Some(NameParts::new()),
            ..Contact::default()
        };
        assert!(contact.has_content());
    }

    #[test]
    fn phone_only_contact_has_content() {
        let mut contact = Contact::new();
        contact
            .phone_numbers
            .insert("mobile number".to_string(), "555".to_string());
        assert!(contact.has_content());
    }

    #[test]
    fn name_accessors_read_components() {
        let mut parts = NameParts::new();
        parts.insert(NameComponent::LastName, "Doe".to_string());
        parts.insert(NameComponent::FirstName, "John".to_string());
        let contact = Contact {
            name_parts: Some(parts),
            ..Contact::default()
        };

        assert_eq!(contact.first_name(), Some("John"));
        assert_eq!(contact.last_name(), Some("Doe"));
        assert_eq!(contact.middle_name(), None);
    }
}
