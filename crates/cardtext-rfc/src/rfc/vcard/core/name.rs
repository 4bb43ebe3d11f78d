//! Components of the structured name (`N`) property.

use indexmap::IndexMap;

/// Name parts in the order they were read, keyed by component.
pub type NameParts = IndexMap<NameComponent, String>;

/// One slot of the semicolon-separated `N` value.
///
/// Slots are assigned by position using [`NameComponent::POSITIONAL`]. The
/// first slot is the last name and the second the first name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameComponent {
    LastName,
    FirstName,
    MiddleName,
    HonorificPrefix,
    HonorificSuffix,
}

impl NameComponent {
    /// Positional mapping of `N` value components.
    pub const POSITIONAL: [Self; 5] = [
        Self::LastName,
        Self::FirstName,
        Self::MiddleName,
        Self::HonorificPrefix,
        Self::HonorificSuffix,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastName => "lastname",
            Self::FirstName => "firstname",
            Self::MiddleName => "middlename",
            Self::HonorificPrefix => "honPref",
            Self::HonorificSuffix => "honPost",
        }
    }
}

impl std::fmt::Display for NameComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
