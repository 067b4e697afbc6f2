//! Contact service layer.
//!
//! Validation, creation and lookup of contacts together with their phones.

use crate::config::MatchOptions;
use crate::domain::{ContactId, FieldName, ValidationErrorKind, ValidationErrors};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, NewContact, Phone};
use crate::observability::{MetricsTracker, Timer};
use crate::repositories::{ContactOrder, ContactQuery, ContactRepository, PhoneRepository};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Run every validation rule against `contact`.
    ///
    /// Presence rules are checked for all three required fields, and a
    /// non-blank email is checked for uniqueness against the store. The
    /// contact is not modified. An empty result means the contact is valid.
    async fn validate(&self, contact: &Contact) -> ContactResult<ValidationErrors>;

    /// Validate and persist a new contact along with its phones.
    ///
    /// Nothing is written when validation fails; the error carries the
    /// field-keyed messages.
    async fn create(&self, input: NewContact) -> ContactResult<Contact>;

    /// Persisted contacts whose last name starts with `letter`, sorted by
    /// last name.
    async fn by_letter(&self, letter: &str) -> ContactResult<Vec<Contact>>;

    /// Every persisted contact, sorted by last name.
    async fn all(&self) -> ContactResult<Vec<Contact>>;

    /// A persisted contact with its phones loaded.
    async fn find(&self, id: ContactId) -> ContactResult<Contact>;

    /// Phones belonging to a contact, in insertion order.
    async fn phones_for(&self, id: ContactId) -> ContactResult<Vec<Phone>>;

    /// Number of phones belonging to a contact.
    async fn phone_count(&self, id: ContactId) -> ContactResult<usize>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    phone_repo: Arc<dyn PhoneRepository>,
    options: MatchOptions,
    metrics: MetricsTracker,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        phone_repo: Arc<dyn PhoneRepository>,
        options: MatchOptions,
    ) -> Self {
        Self {
            contact_repo,
            phone_repo,
            options,
            metrics: MetricsTracker::new(),
        }
    }

    /// Counters for this service.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Undo a partially written create.
    async fn rollback(&self, id: ContactId) {
        if let Err(e) = self.phone_repo.remove_for(id).await {
            error!(contact_id = %id, "Failed to remove phones during rollback: {}", e);
        }
        if let Err(e) = self.contact_repo.remove(id).await {
            error!(contact_id = %id, "Failed to remove contact during rollback: {}", e);
        }
    }

    /// Attach the stored phones to each contact.
    async fn load_phones(&self, contacts: Vec<Contact>) -> ContactResult<Vec<Contact>> {
        let mut loaded = Vec::with_capacity(contacts.len());
        for mut contact in contacts {
            if let Some(id) = contact.id {
                contact.phones = self.phone_repo.list_for(id).await?;
            }
            loaded.push(contact);
        }
        Ok(loaded)
    }

    /// Query by last name ordering, phones included.
    async fn query_sorted(&self, query: ContactQuery) -> ContactResult<Vec<Contact>> {
        let contacts = self
            .contact_repo
            .query(&query.ordered_by(ContactOrder::LastnameAsc))
            .await?;
        self.load_phones(contacts).await
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn validate(&self, contact: &Contact) -> ContactResult<ValidationErrors> {
        let mut errors = contact.validate_presence();

        if let Some(email) = contact.email.as_deref().filter(|e| !e.trim().is_empty()) {
            let existing = self
                .contact_repo
                .find_by_email(email, self.options.email)
                .await?;

            // A persisted contact does not collide with its own row.
            if existing.is_some_and(|other| other.id != contact.id) {
                errors.add(FieldName::Email, ValidationErrorKind::Uniqueness);
            }
        }

        debug!(
            contact = %contact.name(),
            error_fields = errors.len(),
            "Validated contact"
        );
        Ok(errors)
    }

    async fn create(&self, input: NewContact) -> ContactResult<Contact> {
        let contact = input.into_contact();

        let errors = self.validate(&contact).await?;
        if !errors.is_empty() {
            warn!(contact = %contact.name(), errors = %errors, "Rejected contact");
            self.metrics.track_create(false);
            return Err(ContactError::Validation(errors));
        }

        let mut stored = match self.contact_repo.insert(&contact).await {
            Ok(stored) => stored,
            Err(ContactError::Validation(errors)) => {
                // Lost a race with a concurrent insert of the same email.
                warn!(contact = %contact.name(), errors = %errors, "Store rejected contact");
                self.metrics.track_create(false);
                return Err(ContactError::Validation(errors));
            }
            Err(e) => return Err(e),
        };
        let id = stored.id.ok_or_else(|| {
            ContactError::Storage("Store returned a contact without an ID".to_string())
        })?;

        for phone in contact.phones {
            match self.phone_repo.insert(&phone.for_contact(id)).await {
                Ok(phone) => stored.phones.push(phone),
                Err(e) => {
                    warn!(contact_id = %id, "Phone write failed, undoing contact: {}", e);
                    self.rollback(id).await;
                    self.metrics.track_create(false);
                    return Err(e);
                }
            }
        }
        self.metrics.track_create(true);

        info!(
            contact_id = %id,
            phones = stored.phones.len(),
            "Created contact {}",
            stored.name()
        );
        Ok(stored)
    }

    async fn by_letter(&self, letter: &str) -> ContactResult<Vec<Contact>> {
        if letter.is_empty() {
            return Err(ContactError::InvalidRequest(
                "Letter cannot be empty".to_string(),
            ));
        }

        let timer = Timer::new("by_letter");
        let query = ContactQuery::all().with_lastname_prefix(letter, self.options.letter);
        let contacts = self.query_sorted(query).await?;

        self.metrics.track_letter_query(timer.finish(), contacts.len());
        Ok(contacts)
    }

    async fn all(&self) -> ContactResult<Vec<Contact>> {
        self.query_sorted(ContactQuery::all()).await
    }

    async fn find(&self, id: ContactId) -> ContactResult<Contact> {
        let mut contact = self.contact_repo.get(id).await?;
        contact.phones = self.phone_repo.list_for(id).await?;
        Ok(contact)
    }

    async fn phones_for(&self, id: ContactId) -> ContactResult<Vec<Phone>> {
        self.phone_repo.list_for(id).await
    }

    async fn phone_count(&self, id: ContactId) -> ContactResult<usize> {
        self.phone_repo.count_for(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PhoneNumber;
    use crate::models::PhoneType;
    use crate::repositories::{CaseMode, InMemoryContactRepository, InMemoryPhoneRepository};

    fn service_with(options: MatchOptions) -> ContactServiceImpl {
        ContactServiceImpl::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryPhoneRepository::new()),
            options,
        )
    }

    fn service() -> ContactServiceImpl {
        service_with(MatchOptions::default())
    }

    fn new_contact(first: &str, last: &str, email: &str) -> NewContact {
        Contact::new(first, last, email).into()
    }

    #[tokio::test]
    async fn test_validate_valid_contact() {
        let service = service();
        let contact = Contact::new("Shoken", "Fujisaki", "shoken@example.com");
        assert!(service.validate(&contact).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validate_duplicate_email() {
        let service = service();
        service
            .create(new_contact("joe", "tester", "tester@example.com"))
            .await
            .unwrap();

        let contact = Contact::new("jane", "tester", "tester@example.com");
        let errors = service.validate(&contact).await.unwrap();
        assert!(errors.includes(FieldName::Email, "has already been taken"));

        let other = Contact::new("jane", "tester", "jane@example.com");
        assert!(service.validate(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persisted_contact_is_not_its_own_duplicate() {
        let service = service();
        let stored = service
            .create(new_contact("joe", "tester", "tester@example.com"))
            .await
            .unwrap();

        assert!(service.validate(&stored).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_email_skips_uniqueness() {
        let service = service();
        let contact = Contact {
            email: Some(" ".to_string()),
            ..Contact::new("John", "Doe", "")
        };
        let errors = service.validate(&contact).await.unwrap();
        assert_eq!(errors.get(FieldName::Email), ["can't be blank".to_string()]);
    }

    #[tokio::test]
    async fn test_email_case_mode() {
        let exact = service();
        exact
            .create(new_contact("joe", "tester", "tester@example.com"))
            .await
            .unwrap();
        let shouted = Contact::new("jane", "tester", "TESTER@example.com");
        assert!(exact.validate(&shouted).await.unwrap().is_empty());

        let folded = service_with(MatchOptions {
            email: CaseMode::Insensitive,
            ..MatchOptions::default()
        });
        folded
            .create(new_contact("joe", "tester", "tester@example.com"))
            .await
            .unwrap();
        let errors = folded.validate(&shouted).await.unwrap();
        assert!(errors.includes(FieldName::Email, "has already been taken"));
    }

    #[tokio::test]
    async fn test_failed_create_writes_nothing() {
        let contacts = Arc::new(InMemoryContactRepository::new());
        let phones = Arc::new(InMemoryPhoneRepository::new());
        let service =
            ContactServiceImpl::new(contacts.clone(), phones.clone(), MatchOptions::default());

        let input = NewContact {
            firstname: None,
            lastname: Some("Doe".to_string()),
            email: Some("john@example.com".to_string()),
            phones: vec![Phone::new(
                PhoneType::Home,
                PhoneNumber::new("555-0100").unwrap(),
            )],
        };
        let err = service.create(input).await.unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert!(errors.includes(FieldName::Firstname, "can't be blank"));
        assert_eq!(service.metrics().contacts_rejected_total(), 1);

        assert_eq!(contacts.count().await.unwrap(), 0);
        assert_eq!(
            phones.count_for(ContactId::new(1).unwrap()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_create_attaches_phones() {
        let service = service();
        let mut input = new_contact("Tim", "Jones", "tjones@example.com");
        input.phones = vec![
            Phone::new(PhoneType::Home, PhoneNumber::new("555-0100").unwrap()),
            Phone::new(PhoneType::Mobile, PhoneNumber::new("555-0101").unwrap()),
        ];

        let created = service.create(input).await.unwrap();
        let id = created.id.unwrap();
        assert_eq!(created.phones.len(), 2);
        assert!(created.phones.iter().all(|p| p.contact_id == Some(id)));
        assert_eq!(service.phone_count(id).await.unwrap(), 2);
        assert_eq!(service.find(id).await.unwrap().phones, created.phones);
    }

    #[tokio::test]
    async fn test_by_letter_rejects_empty_letter() {
        let service = service();
        let result = service.by_letter("").await;
        assert!(matches!(result, Err(ContactError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_by_letter_case_insensitive_option() {
        let service = service_with(MatchOptions {
            letter: CaseMode::Insensitive,
            ..MatchOptions::default()
        });
        for (first, last, email) in [
            ("John", "Smith", "jsmith@example.com"),
            ("Tim", "Jones", "tjones@example.com"),
            ("John", "Johnson", "jjohnson@example.com"),
        ] {
            service.create(new_contact(first, last, email)).await.unwrap();
        }

        let names: Vec<String> = service
            .by_letter("j")
            .await
            .unwrap()
            .iter()
            .map(Contact::name)
            .collect();
        assert_eq!(names, vec!["John Johnson", "Tim Jones"]);
        assert_eq!(service.metrics().contacts_created_total(), 3);
        assert_eq!(service.metrics().letter_queries_total(), 1);
    }

    /// Phone store that refuses every write.
    struct FailingPhoneRepository;

    #[async_trait]
    impl PhoneRepository for FailingPhoneRepository {
        async fn insert(&self, _phone: &Phone) -> ContactResult<Phone> {
            Err(ContactError::Storage("phone store offline".to_string()))
        }

        async fn count_for(&self, _contact_id: ContactId) -> ContactResult<usize> {
            Ok(0)
        }

        async fn list_for(&self, _contact_id: ContactId) -> ContactResult<Vec<Phone>> {
            Ok(Vec::new())
        }

        async fn remove_for(&self, _contact_id: ContactId) -> ContactResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_failed_phone_write_leaves_no_contact() {
        let contact_repo = Arc::new(InMemoryContactRepository::new());
        let service = ContactServiceImpl::new(
            contact_repo.clone(),
            Arc::new(FailingPhoneRepository),
            MatchOptions::default(),
        );

        let mut input = new_contact("Tim", "Jones", "tjones@example.com");
        input.phones = vec![Phone::new(
            PhoneType::Home,
            PhoneNumber::new("555-0100").unwrap(),
        )];

        let result = service.create(input.clone()).await;
        assert!(matches!(result, Err(ContactError::Storage(_))));
        assert_eq!(contact_repo.count().await.unwrap(), 0);
        assert_eq!(service.metrics().contacts_created_total(), 0);
        assert_eq!(service.metrics().contacts_rejected_total(), 1);

        // The email is free again, so only the phone failure is reported.
        let retry = service.create(input).await;
        assert!(matches!(retry, Err(ContactError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_ignores_ids_on_input_phones() {
        let service = service();
        let json = r#"[
            {"firstname":"Tim","lastname":"Jones","email":"tjones@example.com",
             "phones":[{"id":7,"contact_id":99,"phone_type":"home","phone":"555-0100"}]},
            {"firstname":"Sam","lastname":"Johnson","email":"sjohnson@example.com",
             "phones":[{"id":7,"phone_type":"mobile","phone":"555-0101"}]}
        ]"#;
        let mut inputs = NewContact::list_from_json(json).unwrap().into_iter();

        let tim = service.create(inputs.next().unwrap()).await.unwrap();
        let sam = service.create(inputs.next().unwrap()).await.unwrap();
        let tim_id = tim.id.unwrap();
        let sam_id = sam.id.unwrap();

        assert_eq!(tim.phones[0].contact_id, Some(tim_id));
        assert_eq!(sam.phones[0].contact_id, Some(sam_id));
        assert_ne!(tim.phones[0].id, sam.phones[0].id);
        assert_eq!(service.phone_count(tim_id).await.unwrap(), 1);
        assert_eq!(service.phone_count(sam_id).await.unwrap(), 1);
        assert_eq!(service.all().await.unwrap().len(), 2);
    }
}
