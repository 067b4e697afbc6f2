use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;
use crate::domain::{ContactId, FieldName, ValidationErrorKind, ValidationErrors};
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use crate::repositories::{CaseMode, ContactQuery};

/// Contact repository kept in process memory.
///
/// Rows are keyed by ID, which the repository hands out sequentially from 1.
/// Phones are not stored here; see
/// [`InMemoryPhoneRepository`](crate::repositories::InMemoryPhoneRepository).
pub struct InMemoryContactRepository {
    state: RwLock<State>,
    email_case: CaseMode,
}

#[derive(Default)]
struct State {
    contacts: BTreeMap<ContactId, Contact>,
    last_id: u64,
}

impl InMemoryContactRepository {
    /// Create an empty repository whose email constraint is case-sensitive.
    pub fn new() -> Self {
        Self::with_email_case(CaseMode::Sensitive)
    }

    /// Create an empty repository enforcing email uniqueness under `email_case`.
    pub fn with_email_case(email_case: CaseMode) -> Self {
        Self {
            state: RwLock::new(State::default()),
            email_case,
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: &Contact) -> ContactResult<Contact> {
        if let Some(id) = contact.id {
            return Err(ContactError::InvalidRequest(format!(
                "Contact {} is already persisted",
                id
            )));
        }

        let mut state = self.state.write().await;

        // Unique index on email, checked under the write lock.
        if let Some(email) = contact.email.as_deref() {
            let taken = state.contacts.values().any(|stored| {
                stored
                    .email
                    .as_deref()
                    .is_some_and(|existing| self.email_case.equals(existing, email))
            });
            if taken {
                let mut errors = ValidationErrors::new();
                errors.add(FieldName::Email, ValidationErrorKind::Uniqueness);
                return Err(ContactError::Validation(errors));
            }
        }

        let id = ContactId::new(state.last_id + 1)
            .map_err(|e| ContactError::Storage(e.to_string()))?;
        let now = Utc::now();

        let stored = Contact {
            id: Some(id),
            phones: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
            ..contact.clone()
        };

        state.last_id = id.get();
        state.contacts.insert(id, stored.clone());
        debug!(contact_id = %id, "Stored contact");

        Ok(stored)
    }

    async fn get(&self, id: ContactId) -> ContactResult<Contact> {
        let state = self.state.read().await;
        state
            .contacts
            .get(&id)
            .cloned()
            .ok_or_else(|| ContactError::NotFound(format!("Contact {} not found", id)))
    }

    async fn find_by_email(&self, email: &str, case: CaseMode) -> ContactResult<Option<Contact>> {
        let state = self.state.read().await;
        Ok(state
            .contacts
            .values()
            .find(|contact| {
                contact
                    .email
                    .as_deref()
                    .is_some_and(|stored| case.equals(stored, email))
            })
            .cloned())
    }

    async fn query(&self, query: &ContactQuery) -> ContactResult<Vec<Contact>> {
        let state = self.state.read().await;
        let mut matches: Vec<Contact> = state
            .contacts
            .values()
            .filter(|contact| query.matches(contact))
            .cloned()
            .collect();

        query.sort(&mut matches);
        Ok(matches)
    }

    async fn count(&self) -> ContactResult<usize> {
        Ok(self.state.read().await.contacts.len())
    }

    async fn remove(&self, id: ContactId) -> ContactResult<()> {
        let mut state = self.state.write().await;
        state
            .contacts
            .remove(&id)
            .map(|_| debug!(contact_id = %id, "Removed contact"))
            .ok_or_else(|| ContactError::NotFound(format!("Contact {} not found", id)))
    }
}
