use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::domain::{ContactId, PhoneId};
use crate::error::{ContactError, ContactResult};
use crate::models::Phone;
use crate::repositories::traits::PhoneRepository;

/// Phone repository kept in process memory.
pub struct InMemoryPhoneRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    phones: Vec<Phone>,
    last_id: u64,
}

impl InMemoryPhoneRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }
}

impl Default for InMemoryPhoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhoneRepository for InMemoryPhoneRepository {
    async fn insert(&self, phone: &Phone) -> ContactResult<Phone> {
        if phone.contact_id.is_none() {
            return Err(ContactError::InvalidRequest(
                "Phone must belong to a contact".to_string(),
            ));
        }
        if phone.id.is_some() {
            return Err(ContactError::InvalidRequest(
                "Phone is already persisted".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let id = PhoneId::new(state.last_id + 1)
            .map_err(|e| ContactError::Storage(e.to_string()))?;

        let stored = Phone {
            id: Some(id),
            ..phone.clone()
        };
        state.last_id = id.get();
        state.phones.push(stored.clone());

        Ok(stored)
    }

    async fn count_for(&self, contact_id: ContactId) -> ContactResult<usize> {
        let state = self.state.read().await;
        Ok(state
            .phones
            .iter()
            .filter(|phone| phone.contact_id == Some(contact_id))
            .count())
    }

    async fn list_for(&self, contact_id: ContactId) -> ContactResult<Vec<Phone>> {
        let state = self.state.read().await;
        Ok(state
            .phones
            .iter()
            .filter(|phone| phone.contact_id == Some(contact_id))
            .cloned()
            .collect())
    }

    async fn remove_for(&self, contact_id: ContactId) -> ContactResult<()> {
        let mut state = self.state.write().await;
        state
            .phones
            .retain(|phone| phone.contact_id != Some(contact_id));
        Ok(())
    }
}
