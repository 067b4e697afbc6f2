//! Data models for contacts and their phones.
//!
//! These structures represent the records the contact book validates and
//! persists, plus the input shape accepted when creating a contact.

pub mod contact;
pub mod phone;

pub use contact::{Contact, NewContact};
pub use phone::{Phone, PhoneType};
