//! Contact Directory - a bounded, in-memory contact book.
//!
//! The directory stores contacts identified by their case-insensitive first and
//! last name, refuses duplicates, never grows past its capacity, and lists its
//! contents alphabetically. An interactive console menu drives it.
//!
//! # Architecture
//!
//! - **domain**: Identity key and validation errors
//! - **models**: The contact record
//! - **directory**: Capacity and uniqueness enforcement, CRUD operations
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **menu**: Console presentation layer over a directory

// Re-export commonly used types
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;

pub use config::Config;
pub use directory::{Directory, DEFAULT_CAPACITY};
pub use domain::{ContactKey, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use menu::{Menu, MenuOption};
pub use models::Contact;
