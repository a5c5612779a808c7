//! Bounded contact directory.
//!
//! The directory owns its contacts, keyed by [`ContactKey`], and enforces two
//! invariants: it never holds more than `capacity` contacts, and it never holds
//! two contacts with the same case-insensitive first and last name.
//!
//! Every operation validates before mutating and reports its outcome as a
//! [`DirectoryResult`]. Nothing here prints or logs; rendering is left to the
//! caller.

use crate::domain::{ContactKey, ValidationError};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Contact;
use std::collections::HashMap;

/// Capacity used when none is requested.
pub const DEFAULT_CAPACITY: usize = 10;

/// An in-memory contact directory with a fixed capacity.
#[derive(Debug, Clone)]
pub struct Directory {
    contacts: HashMap<ContactKey, Contact>,
    capacity: usize,
}

impl Directory {
    /// Create an empty directory.
    ///
    /// `None` gives [`DEFAULT_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidCapacity` if an explicit capacity of zero
    /// is requested.
    pub fn new(capacity: Option<usize>) -> DirectoryResult<Self> {
        let capacity = match capacity {
            Some(0) => return Err(DirectoryError::InvalidCapacity(0)),
            Some(capacity) => capacity,
            None => DEFAULT_CAPACITY,
        };

        Ok(Self {
            contacts: HashMap::new(),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.len() >= self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.contacts.len())
    }

    /// Add a contact.
    ///
    /// Checks run in order: blank names, duplicates, then capacity. The
    /// directory is unchanged unless all three pass.
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        Self::validate(&contact)?;

        // A duplicate is reported as such even when the directory is full.
        let key = contact.key();
        if self.contacts.contains_key(&key) {
            return Err(DirectoryError::DuplicateContact(contact.full_name()));
        }

        if self.is_full() {
            return Err(DirectoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.contacts.insert(key, contact);
        Ok(())
    }

    /// Whether a contact with this first and last name is stored.
    pub fn exists(&self, first_name: &str, last_name: &str) -> bool {
        self.contacts
            .contains_key(&ContactKey::new(first_name, last_name))
    }

    /// Look up a stored contact by name.
    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts.get(&ContactKey::new(first_name, last_name))
    }

    /// Phone number of the contact with this first and last name.
    pub fn find_phone(&self, first_name: &str, last_name: &str) -> DirectoryResult<&str> {
        self.get(first_name, last_name)
            .map(Contact::phone)
            .ok_or_else(|| not_found(first_name, last_name))
    }

    /// Overwrite the phone number of a stored contact in place.
    pub fn update_phone(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone: impl Into<String>,
    ) -> DirectoryResult<()> {
        let contact = self
            .contacts
            .get_mut(&ContactKey::new(first_name, last_name))
            .ok_or_else(|| not_found(first_name, last_name))?;

        contact.set_phone(phone);
        Ok(())
    }

    /// Remove a contact, returning the stored record.
    pub fn remove(&mut self, first_name: &str, last_name: &str) -> DirectoryResult<Contact> {
        self.contacts
            .remove(&ContactKey::new(first_name, last_name))
            .ok_or_else(|| not_found(first_name, last_name))
    }

    /// All contacts, sorted by first name then last name, ignoring case.
    ///
    /// An empty directory yields an empty vector.
    pub fn list(&self) -> Vec<&Contact> {
        let mut entries: Vec<(&ContactKey, &Contact)> = self.contacts.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, contact)| contact).collect()
    }

    fn validate(contact: &Contact) -> Result<(), ValidationError> {
        if contact.first_name().trim().is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }
        if contact.last_name().trim().is_empty() {
            return Err(ValidationError::EmptyLastName);
        }
        Ok(())
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            contacts: HashMap::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

fn not_found(first_name: &str, last_name: &str) -> DirectoryError {
    DirectoryError::NotFound(format!("{} {}", first_name, last_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_ten() {
        let directory = Directory::new(None).unwrap();
        assert_eq!(directory.capacity(), DEFAULT_CAPACITY);
        assert_eq!(directory.free_slots(), 10);
        assert!(directory.is_empty());
        assert!(!directory.is_full());
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert_eq!(
            Directory::new(Some(0)).unwrap_err(),
            DirectoryError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_default_matches_new_none() {
        let directory = Directory::default();
        assert_eq!(directory.capacity(), Directory::new(None).unwrap().capacity());
    }

    #[test]
    fn test_add_rejects_blank_first_name() {
        let mut directory = Directory::new(Some(2)).unwrap();
        let err = directory.add(Contact::new("   ", "Lee", "555")).unwrap_err();
        assert_eq!(err, DirectoryError::Validation(ValidationError::EmptyFirstName));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_last_name() {
        let mut directory = Directory::new(Some(2)).unwrap();
        let err = directory.add(Contact::new("Amy", "\t", "555")).unwrap_err();
        assert_eq!(err, DirectoryError::Validation(ValidationError::EmptyLastName));
    }

    #[test]
    fn test_validation_checked_before_capacity() {
        let mut directory = Directory::new(Some(1)).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();

        let err = directory.add(Contact::new("", "", "")).unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
    }

    #[test]
    fn test_duplicate_reported_when_full() {
        let mut directory = Directory::new(Some(1)).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();

        let err = directory.add(Contact::new("amy", "lee", "999")).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateContact("amy lee".to_string()));

        let err = directory.add(Contact::new("Bob", "Lee", "777")).unwrap_err();
        assert_eq!(err, DirectoryError::CapacityExceeded { capacity: 1 });
    }

    #[test]
    fn test_duplicate_keeps_original_phone() {
        let mut directory = Directory::new(Some(5)).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();

        let err = directory.add(Contact::new("AMY", "lee", "999")).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateContact("AMY lee".to_string()));
        assert_eq!(directory.find_phone("amy", "LEE").unwrap(), "555");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_update_phone_in_place() {
        let mut directory = Directory::new(None).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();

        directory.update_phone("amy", "lee", "777").unwrap();

        let stored = directory.get("Amy", "Lee").unwrap();
        assert_eq!(stored.phone(), "777");
        assert_eq!(stored.first_name(), "Amy");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_update_phone_missing_contact() {
        let mut directory = Directory::new(None).unwrap();
        let err = directory.update_phone("No", "One", "1").unwrap_err();
        assert_eq!(err, DirectoryError::NotFound("No One".to_string()));
    }

    #[test]
    fn test_remove_returns_stored_contact() {
        let mut directory = Directory::new(None).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();

        let removed = directory.remove("AMY", "LEE").unwrap();
        assert_eq!(removed.full_name(), "Amy Lee");
        assert_eq!(removed.phone(), "555");
        assert!(directory.is_empty());
        assert!(directory.remove("Amy", "Lee").is_err());
    }

    #[test]
    fn test_free_slots_recover_after_remove() {
        let mut directory = Directory::new(Some(1)).unwrap();
        directory.add(Contact::new("Amy", "Lee", "555")).unwrap();
        assert!(directory.is_full());

        directory.remove("Amy", "Lee").unwrap();
        assert!(!directory.is_full());
        assert_eq!(directory.free_slots(), 1);
        directory.add(Contact::new("Bob", "Lee", "777")).unwrap();
    }

    #[test]
    fn test_list_matches_contact_ordering() {
        let mut directory = Directory::new(None).unwrap();
        for (first, last) in [("bob", "Z"), ("Bob", "a"), ("ALAN", "m"), ("Σίμος", "x"), ("zed", "q")] {
            directory.add(Contact::new(first, last, "")).unwrap();
        }

        let listed: Vec<Contact> = directory.list().into_iter().cloned().collect();
        let mut sorted = listed.clone();
        sorted.sort();

        let names = |contacts: &[Contact]| -> Vec<String> {
            contacts.iter().map(Contact::full_name).collect()
        };
        assert_eq!(names(&listed), names(&sorted));
        assert_eq!(listed[0].full_name(), "ALAN m");
        assert_eq!(listed[4].full_name(), "Σίμος x");
    }

    #[test]
    fn test_list_empty() {
        let directory = Directory::new(None).unwrap();
        assert!(directory.list().is_empty());
    }
}
