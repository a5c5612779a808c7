//! Data models for the contact directory.
//!
//! This module contains the contact record stored by a directory.

pub mod contact;

pub use contact::Contact;
