//! Localized field captions.

use cardtext_core::types::Locale;

/// Captions written in front of each rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    pub formatted_name: &'static str,
    pub first_name: &'static str,
    pub middle_name: &'static str,
    pub last_name: &'static str,
    pub nickname: &'static str,
    pub organization: &'static str,
    pub birthday: &'static str,
    pub notes: &'static str,
    pub revision_date: &'static str,
}

const GREEK: Captions = Captions {
    formatted_name: "Ονοματεπώνυμο",
    first_name: "Όνομα",
    middle_name: "Middle Name",
    last_name: "Επώνυμο",
    nickname: "Ψευδώνυμο",
    organization: "Οργανισμός",
    birthday: "Γενέθλια",
    notes: "Σημειώσεις",
    revision_date: "Τελευταία τροποποίηση",
};

const ENGLISH: Captions = Captions {
    formatted_name: "Full name",
    first_name: "First name",
    middle_name: "Middle name",
    last_name: "Last name",
    nickname: "Nickname",
    organization: "Organization",
    birthday: "Birthday",
    notes: "Notes",
    revision_date: "Last modified",
};

impl Captions {
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Greek => GREEK,
            Locale::English => ENGLISH,
        }
    }
}

impl Default for Captions {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
