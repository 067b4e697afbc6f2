//! Record identifier value objects.

use super::errors::ValueError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are assigned by the store when a contact is persisted and are always
/// positive.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u64);

impl ContactId {
    /// Create a new ContactId, validating that it's not zero.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidId` if the provided ID is zero.
    pub fn new(id: u64) -> Result<Self, ValueError> {
        if id == 0 {
            return Err(ValueError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A type-safe wrapper for phone record IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneId(u64);

impl PhoneId {
    /// Create a new PhoneId, validating that it's not zero.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidId` if the provided ID is zero.
    pub fn new(id: u64) -> Result<Self, ValueError> {
        if id == 0 {
            return Err(ValueError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> u64 {
        self.0
    }
}

// Serde support - both IDs serialize as plain numbers
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        ContactId::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for PhoneId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        PhoneId::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PhoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
