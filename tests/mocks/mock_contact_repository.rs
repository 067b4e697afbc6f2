use async_trait::async_trait;
use contact_book::domain::{ContactId, FieldName, ValidationErrorKind, ValidationErrors};
use contact_book::error::{ContactError, ContactResult};
use contact_book::models::Contact;
use contact_book::repositories::{CaseMode, ContactQuery, ContactRepository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in a map, tracks method calls for verification, and can
/// be switched into a failing mode to exercise storage errors. Like the
/// in-memory store, `insert` rejects an email that is already stored.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<ContactId, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    unavailable: Arc<AtomicBool>,
    lookup_blind: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already persisted contact.
    pub fn add_contact(&self, contact: Contact) {
        let id = contact.id.expect("mock contacts need an id");
        self.contacts.lock().unwrap().insert(id, contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Make every subsequent call fail with a storage error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make `find_by_email` report no match, as if another writer stored the
    /// same email between the lookup and the insert.
    pub fn set_lookup_blind(&self, blind: bool) {
        self.lookup_blind.store(blind, Ordering::SeqCst);
    }

    fn track_call(&self, method: &str) -> ContactResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ContactError::Storage("mock store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn insert(&self, contact: &Contact) -> ContactResult<Contact> {
        self.track_call("insert")?;

        let mut contacts = self.contacts.lock().unwrap();
        if let Some(email) = contact.email.as_deref() {
            if contacts.values().any(|c| c.email.as_deref() == Some(email)) {
                let mut errors = ValidationErrors::new();
                errors.add(FieldName::Email, ValidationErrorKind::Uniqueness);
                return Err(ContactError::Validation(errors));
            }
        }

        let next = contacts.keys().map(|id| id.get()).max().unwrap_or(0) + 1;
        let id = ContactId::new(next).unwrap();

        let stored = Contact {
            id: Some(id),
            phones: Vec::new(),
            ..contact.clone()
        };
        contacts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: ContactId) -> ContactResult<Contact> {
        self.track_call("get")?;

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| ContactError::NotFound(format!("Contact {} not found", id)))
    }

    async fn find_by_email(&self, email: &str, case: CaseMode) -> ContactResult<Option<Contact>> {
        self.track_call("find_by_email")?;
        if self.lookup_blind.load(Ordering::SeqCst) {
            return Ok(None);
        }

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .find(|c| c.email.as_deref().is_some_and(|e| case.equals(e, email)))
            .cloned())
    }

    async fn query(&self, query: &ContactQuery) -> ContactResult<Vec<Contact>> {
        self.track_call("query")?;

        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts
            .values()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        query.sort(&mut result);
        Ok(result)
    }

    async fn count(&self) -> ContactResult<usize> {
        self.track_call("count")?;
        Ok(self.contacts.lock().unwrap().len())
    }

    async fn remove(&self, id: ContactId) -> ContactResult<()> {
        self.track_call("remove")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ContactError::NotFound(format!("Contact {} not found", id)))
    }
}
