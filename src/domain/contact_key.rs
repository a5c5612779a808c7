//! ContactKey value object.

use std::fmt;

/// The case-insensitive identity of a contact.
///
/// Two contacts whose first and last names match ignoring case share the same
/// key. The key stores both names case-folded, so the derived `Eq`, `Hash` and
/// `Ord` implementations are exactly the identity and ordering contracts of a
/// contact: first name, then last name. Names are not trimmed.
///
/// Folding maps every character to upper case and then to lower case, one
/// character at a time. `str::to_lowercase` is context-sensitive for final
/// sigma and would give "ΑΣ" and "ασ" different keys.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactKey;
///
/// let a = ContactKey::new("Amy", "Lee");
/// let b = ContactKey::new("AMY", "lee");
/// assert_eq!(a, b);
/// assert_eq!(a.first(), "amy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactKey {
    first: String,
    last: String,
}

impl ContactKey {
    /// Build the key for the given first and last name.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first: fold_case(first_name),
            last: fold_case(last_name),
        }
    }

    /// Folded first name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Folded last name.
    pub fn last(&self) -> &str {
        &self.last
    }
}

fn fold_case(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
