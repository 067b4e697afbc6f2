//! Contact factories.
//!
//! `build_contact` returns a valid, unsaved contact with a unique email and
//! three phones (home, office, mobile). `create_contact` persists one through
//! a service.

use contact_book::domain::PhoneNumber;
use contact_book::{
    Contact, ContactResult, ContactService, ContactServiceImpl, InMemoryContactRepository,
    InMemoryPhoneRepository, MatchOptions, NewContact, Phone, PhoneType,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

/// Service backed by fresh in-memory stores.
#[allow(dead_code)]
pub fn new_service() -> ContactServiceImpl {
    new_service_with(MatchOptions::default())
}

/// Service backed by fresh in-memory stores, with custom matching.
#[allow(dead_code)]
pub fn new_service_with(options: MatchOptions) -> ContactServiceImpl {
    ContactServiceImpl::new(
        Arc::new(InMemoryContactRepository::with_email_case(options.email)),
        Arc::new(InMemoryPhoneRepository::new()),
        options,
    )
}

/// A valid unsaved contact with three phones.
#[allow(dead_code)]
pub fn build_contact() -> Contact {
    let n = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let mut contact = Contact::new("John", "Doe", format!("johndoe{}@example.com", n));
    contact.phones = PhoneType::ALL
        .iter()
        .enumerate()
        .map(|(i, phone_type)| {
            let number = PhoneNumber::new(format!("785-555-{:02}{:02}", n % 100, i)).unwrap();
            Phone::new(*phone_type, number)
        })
        .collect();
    contact
}

/// `build_contact` with the given names and email.
#[allow(dead_code)]
pub fn build_contact_with(firstname: &str, lastname: &str, email: &str) -> Contact {
    Contact {
        firstname: Some(firstname.to_string()),
        lastname: Some(lastname.to_string()),
        email: Some(email.to_string()),
        ..build_contact()
    }
}

/// Persist `contact` through `service`.
#[allow(dead_code)]
pub async fn create_contact(
    service: &impl ContactService,
    contact: Contact,
) -> ContactResult<Contact> {
    service.create(NewContact::from(contact)).await
}
