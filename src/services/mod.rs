//! Application service layer.
//!
//! Services contain the business rules and orchestrate the repositories.
//! They are the boundary callers use instead of touching storage directly.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
