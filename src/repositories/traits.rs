use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::{Contact, Phone};
use crate::repositories::{CaseMode, ContactQuery};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (in-memory, database-backed, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact and return it with its ID and timestamps set.
    ///
    /// Implementations must reject an email that is already stored, as a
    /// backstop for the service-level uniqueness check.
    async fn insert(&self, contact: &Contact) -> ContactResult<Contact>;

    /// Retrieve a single contact by ID.
    async fn get(&self, id: ContactId) -> ContactResult<Contact>;

    /// Find the stored contact with this email, if any.
    async fn find_by_email(&self, email: &str, case: CaseMode) -> ContactResult<Option<Contact>>;

    /// Contacts matching the query's predicate, in the query's order.
    async fn query(&self, query: &ContactQuery) -> ContactResult<Vec<Contact>>;

    /// Number of stored contacts.
    async fn count(&self) -> ContactResult<usize>;

    /// Drop a contact written by `insert`, used to undo a create whose
    /// phones could not be written.
    async fn remove(&self, id: ContactId) -> ContactResult<()>;
}

/// Repository for the phones owned by contacts.
#[async_trait]
pub trait PhoneRepository: Send + Sync {
    /// Persist a phone; it must already carry its owner's ID.
    async fn insert(&self, phone: &Phone) -> ContactResult<Phone>;

    /// Number of phones stored for a contact.
    async fn count_for(&self, contact_id: ContactId) -> ContactResult<usize>;

    /// Phones stored for a contact, in insertion order.
    async fn list_for(&self, contact_id: ContactId) -> ContactResult<Vec<Phone>>;

    /// Drop every phone stored for a contact.
    async fn remove_for(&self, contact_id: ContactId) -> ContactResult<()>;
}
