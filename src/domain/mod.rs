//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! record identifiers and phone numbers, plus the field-keyed validation
//! error map used by the contact validation contract.

pub mod contact_id;
pub mod errors;
pub mod phone;

pub use contact_id::{ContactId, PhoneId};
pub use errors::{FieldName, ValidationErrorKind, ValidationErrors, ValueError};
pub use phone::PhoneNumber;
