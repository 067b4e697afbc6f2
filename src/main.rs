//! Contact Book - command line entry point
//!
//! Usage: `contact-book <contacts.json> [letter]`
//!
//! Loads a JSON array of contacts into an in-memory store, then prints either
//! the contacts whose last name starts with `letter` or every contact, as
//! JSON on stdout. Contacts that fail validation are reported in the log and
//! skipped.

use anyhow::{bail, Context, Result};
use contact_book::observability::init_logging;
use contact_book::repositories::{ContactRepository, PhoneRepository};
use contact_book::{
    Config, ContactError, ContactService, ContactServiceImpl, InMemoryContactRepository,
    InMemoryPhoneRepository, NewContact,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config);

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: contact-book <contacts.json> [letter]");
    };
    let letter = args.next();

    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    let inputs = NewContact::list_from_json(&json)?;

    let contact_repo = Arc::new(InMemoryContactRepository::with_email_case(
        config.match_options().email,
    )) as Arc<dyn ContactRepository>;
    let phone_repo = Arc::new(InMemoryPhoneRepository::new()) as Arc<dyn PhoneRepository>;
    let service = ContactServiceImpl::new(contact_repo, phone_repo, config.match_options());

    for input in inputs {
        match service.create(input).await {
            Ok(_) => {}
            Err(ContactError::Validation(errors)) => {
                warn!(errors = %errors, "Skipped invalid contact");
            }
            Err(e) => {
                error!("Failed to store contact: {}", e);
                return Err(e.into());
            }
        }
    }

    let contacts = match letter.as_deref() {
        Some(letter) => service.by_letter(letter).await?,
        None => service.all().await?,
    };

    info!("{}", service.metrics().summary());
    println!("{}", serde_json::to_string_pretty(&contacts)?);
    Ok(())
}
