//! Domain value objects and types.
//!
//! This module contains the identity key that decides whether two contacts
//! refer to the same person, along with the validation errors raised before
//! a contact is admitted into a directory.

pub mod contact_key;
pub mod errors;

pub use contact_key::ContactKey;
pub use errors::ValidationError;
