//! Phone record owned by a contact.

use crate::domain::{ContactId, PhoneId, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of phone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Home,
    Office,
    Mobile,
}

impl PhoneType {
    /// All phone types, in the order a fully populated contact lists them.
    pub const ALL: [PhoneType; 3] = [PhoneType::Home, PhoneType::Office, PhoneType::Mobile];

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone number belonging to a contact.
///
/// `id` and `contact_id` stay `None` until the phone is written alongside
/// its contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Store-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PhoneId>,

    /// Owning contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<ContactId>,

    /// Line type
    pub phone_type: PhoneType,

    /// The number itself
    pub phone: PhoneNumber,
}

impl Phone {
    /// Create an unsaved phone.
    pub fn new(phone_type: PhoneType, phone: PhoneNumber) -> Self {
        Self {
            id: None,
            contact_id: None,
            phone_type,
            phone,
        }
    }

    /// Same phone, attached to `contact_id`.
    pub fn for_contact(mut self, contact_id: ContactId) -> Self {
        self.contact_id = Some(contact_id);
        self
    }
}
