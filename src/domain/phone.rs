//! PhoneNumber value object.

use super::errors::ValueError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Formatting characters accepted alongside digits.
const PUNCTUATION: [char; 6] = [' ', '-', '(', ')', '+', '.'];

/// A phone number as stored on a [`Phone`](crate::models::Phone) record.
///
/// Surrounding whitespace is trimmed. The remaining text must contain at
/// least one digit and nothing other than digits and common punctuation.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" 785-555-1234 ").unwrap();
/// assert_eq!(phone.as_str(), "785-555-1234");
/// assert_eq!(phone.digits_only(), "7855551234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPhone` for empty input, input without
    /// digits, or input containing letters or other symbols.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValueError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());
        let well_formed = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || PUNCTUATION.contains(&c));

        if !has_digit || !well_formed {
            return Err(ValueError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits with all formatting removed.
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
