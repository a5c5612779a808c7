//! Contact model representing a person in the directory.

use crate::domain::ContactKey;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A contact: a first name, a last name and a phone number.
///
/// Identity is the case-insensitive (first name, last name) pair, see
/// [`ContactKey`]. The phone never takes part in equality, hashing or
/// ordering, so two contacts that differ only by phone compare equal.
///
/// Construction stores the fields verbatim. Blank names are rejected by the
/// directory when the contact is added, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    first_name: String,
    last_name: String,
    #[serde(default)]
    phone: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// "First Last", as entered.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The identity key of this contact.
    pub fn key(&self) -> ContactKey {
        ContactKey::new(&self.first_name, &self.last_name)
    }

    /// Replace the phone number. Identity is unaffected.
    pub(crate) fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.phone)
    }
}
