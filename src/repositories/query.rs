//! Query description passed to [`ContactRepository::query`](super::ContactRepository::query).

use crate::models::Contact;
use std::cmp::Ordering;

/// String comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Byte-for-byte comparison
    #[default]
    Sensitive,

    /// Compare lowercased forms
    Insensitive,
}

impl CaseMode {
    /// `Sensitive` when `sensitive` is true.
    pub fn from_sensitive(sensitive: bool) -> Self {
        if sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }

    /// Whether `a` and `b` are equal under this mode.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }

    /// Whether `value` begins with `prefix` under this mode.
    pub fn starts_with(&self, value: &str, prefix: &str) -> bool {
        match self {
            Self::Sensitive => value.starts_with(prefix),
            Self::Insensitive => value.to_lowercase().starts_with(&prefix.to_lowercase()),
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactOrder {
    /// Order the store wrote the records in
    #[default]
    Insertion,

    /// Ascending last name, then first name, then ID
    LastnameAsc,
}

impl ContactOrder {
    /// Compare two contacts under this ordering.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            Self::Insertion => a.id.cmp(&b.id),
            Self::LastnameAsc => a
                .lastname
                .cmp(&b.lastname)
                .then_with(|| a.firstname.cmp(&b.firstname))
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

/// Predicate and ordering for a contact query.
///
/// The default query matches every contact in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Only contacts whose last name starts with this prefix
    pub lastname_prefix: Option<String>,

    /// How the prefix is compared
    pub case: CaseMode,

    /// Result ordering
    pub order: ContactOrder,
}

impl ContactQuery {
    /// Every contact, insertion order.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to last names starting with `prefix`.
    pub fn with_lastname_prefix(mut self, prefix: impl Into<String>, case: CaseMode) -> Self {
        self.lastname_prefix = Some(prefix.into());
        self.case = case;
        self
    }

    /// Set the result ordering.
    pub fn ordered_by(mut self, order: ContactOrder) -> Self {
        self.order = order;
        self
    }

    /// Whether `contact` satisfies the predicate.
    pub fn matches(&self, contact: &Contact) -> bool {
        match &self.lastname_prefix {
            None => true,
            Some(prefix) => contact
                .lastname
                .as_deref()
                .is_some_and(|lastname| self.case.starts_with(lastname, prefix)),
        }
    }

    /// Sort `contacts` in place by the query's ordering.
    pub fn sort(&self, contacts: &mut [Contact]) {
        contacts.sort_by(|a, b| self.order.compare(a, b));
    }
}
