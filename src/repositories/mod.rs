mod in_memory_contact_repository;
mod in_memory_phone_repository;
mod query;
mod traits;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use in_memory_phone_repository::InMemoryPhoneRepository;
pub use query::{CaseMode, ContactOrder, ContactQuery};
pub use traits::{ContactRepository, PhoneRepository};
