//! Contact Book - contact records with validation, phones and last-name filtering.
//!
//! A contact carries a first name, last name and email, all required, with
//! the email unique across stored contacts. Contacts own any number of
//! phones. Storage sits behind repository traits so the rules can be
//! exercised against the bundled in-memory stores or any other backend.
//!
//! # Architecture
//!
//! - **domain**: Value objects (IDs, phone numbers) and the validation error map
//! - **models**: Contact and phone records
//! - **repositories**: Storage traits, query description and in-memory stores
//! - **services**: Validation, creation and lookup rules
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **observability**: Logging setup and counters

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::{Config, MatchOptions};
pub use domain::{FieldName, ValidationErrors};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{Contact, NewContact, Phone, PhoneType};
pub use repositories::{InMemoryContactRepository, InMemoryPhoneRepository};
pub use services::{ContactService, ContactServiceImpl};
