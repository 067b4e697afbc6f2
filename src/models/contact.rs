//! Contact model representing a person in the contact book.

use crate::domain::{ContactId, FieldName, ValidationErrorKind, ValidationErrors};
use crate::error::ContactResult;
use crate::models::Phone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record.
///
/// The text fields are optional so that an incomplete contact can be
/// represented and validated; see [`Contact::validate_presence`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Store-assigned identifier, `None` until persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,

    /// First name
    pub firstname: Option<String>,

    /// Last name
    pub lastname: Option<String>,

    /// Email address, unique across persisted contacts
    pub email: Option<String>,

    /// Phones owned by this contact, in insertion order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,

    /// When the contact was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the contact was last written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Create an unsaved contact with all three required fields set.
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            firstname: Some(firstname.into()),
            lastname: Some(lastname.into()),
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Full name: first name, a single space, last name.
    ///
    /// Computed from the in-memory fields only, so it works on contacts that
    /// were never persisted.
    ///
    /// ```
    /// use contact_book::Contact;
    ///
    /// let contact = Contact::new("John", "Doe", "johndoe@example.com");
    /// assert_eq!(contact.name(), "John Doe");
    /// ```
    pub fn name(&self) -> String {
        format!(
            "{} {}",
            self.firstname.as_deref().unwrap_or_default(),
            self.lastname.as_deref().unwrap_or_default()
        )
    }

    /// Whether the store has assigned this contact an ID.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Run the presence rules.
    ///
    /// Every required field is checked; the result lists each blank one.
    /// Uniqueness needs the store and is checked by
    /// [`ContactService::validate`](crate::services::ContactService::validate).
    pub fn validate_presence(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            (FieldName::Firstname, &self.firstname),
            (FieldName::Lastname, &self.lastname),
            (FieldName::Email, &self.email),
        ] {
            if is_blank(value.as_deref()) {
                errors.add(field, ValidationErrorKind::Presence);
            }
        }
        errors
    }
}

/// Missing, empty and whitespace-only values all count as blank.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Input for creating a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
    /// First name
    pub firstname: Option<String>,

    /// Last name
    pub lastname: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Phones to create with the contact
    pub phones: Vec<Phone>,
}

impl NewContact {
    /// Parse a JSON array of new contacts.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Json` if the input is not an array of contact
    /// objects or a phone number is malformed.
    pub fn list_from_json(json: &str) -> ContactResult<Vec<NewContact>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The unsaved contact this input describes.
    ///
    /// Any `id` or `contact_id` carried by the input phones is dropped; the
    /// phones are always new records of the new contact.
    pub fn into_contact(self) -> Contact {
        let phones = self
            .phones
            .into_iter()
            .map(|phone| Phone::new(phone.phone_type, phone.phone))
            .collect();

        Contact {
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            phones,
            ..Default::default()
        }
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self {
            firstname: contact.firstname,
            lastname: contact.lastname,
            email: contact.email,
            phones: contact.phones,
        }
    }
}
