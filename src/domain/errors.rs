//! Domain validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Errors that can occur when constructing a domain value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Record IDs start at 1.
    InvalidId(u64),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid record ID: {}", id),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValueError {}

/// The validated fields of a contact.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Firstname,
    Lastname,
    Email,
}

impl FieldName {
    /// Attribute name as used in error maps and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Email => "email",
        }
    }

    /// Capitalized attribute name used to build full messages.
    pub fn human_name(&self) -> &'static str {
        match self {
            Self::Firstname => "Firstname",
            Self::Lastname => "Lastname",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two ways a contact field can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is missing or blank.
    Presence,

    /// The value collides with another persisted record.
    Uniqueness,
}

impl ValidationErrorKind {
    /// Human-readable message stored in the error map.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Presence => "can't be blank",
            Self::Uniqueness => "has already been taken",
        }
    }
}

/// Field-keyed validation messages for a contact.
///
/// An empty map means the contact is valid. Messages for a field keep the
/// order the rules produced them in.
///
/// # Example
///
/// ```
/// use contact_book::domain::{FieldName, ValidationErrorKind, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add(FieldName::Email, ValidationErrorKind::Presence);
/// assert!(errors.includes(FieldName::Email, "can't be blank"));
/// assert_eq!(errors.to_string(), "Email can't be blank");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure of `kind` on `field`.
    pub fn add(&mut self, field: FieldName, kind: ValidationErrorKind) {
        self.errors
            .entry(field)
            .or_default()
            .push(kind.message().to_string());
    }

    /// True when no rule failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for `field`; empty when the field is valid.
    pub fn get(&self, field: FieldName) -> &[String] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` has exactly `message` among its messages.
    pub fn includes(&self, field: FieldName, message: &str) -> bool {
        self.get(field).iter().any(|m| m == message)
    }

    /// Fields with errors, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    /// Iterate over `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &[String])> {
        self.errors.iter().map(|(f, m)| (*f, m.as_slice()))
    }

    /// Messages prefixed with the field name, e.g. "Email can't be blank".
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |m| format!("{} {}", field.human_name(), m))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
