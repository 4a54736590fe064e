//! Recruit CRUD with storage-failure translation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use recruit_core::error::AppError;
use recruit_core::result::AppResult;
use recruit_database::{RecruitStore, STUDENT_ID_CONSTRAINT, StoreError};
use recruit_entity::recruit::{NewRecruit, Recruit, RecruitPatch};

use crate::notification::ConfirmationNotifier;

/// Creates, reads, updates and deletes recruit records.
#[derive(Debug, Clone)]
pub struct RecruitService {
    store: Arc<dyn RecruitStore>,
    notifier: Arc<ConfirmationNotifier>,
}

impl RecruitService {
    /// Creates a new recruit service.
    pub fn new(store: Arc<dyn RecruitStore>, notifier: Arc<ConfirmationNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Persist a submission and queue its confirmation email.
    ///
    /// The email is sent on a detached task; its outcome never affects
    /// the returned record.
    pub async fn create(&self, input: NewRecruit) -> AppResult<Recruit> {
        let input = input.normalized();
        let recruit = self.store.insert(&input).await.map_err(|e| {
            translate(e, || {
                format!(
                    "A recruit with student ID \"{}\" has already been submitted. Each student can only submit once.",
                    input.student_id
                )
            })
        })?;

        info!(recruit_id = recruit.id, student_id = %recruit.student_id, "Recruit submitted");
        self.notifier.notify(&recruit);
        Ok(recruit)
    }

    /// Every stored recruit.
    pub async fn find_all(&self) -> AppResult<Vec<Recruit>> {
        Ok(self.store.find_all().await?)
    }

    /// One recruit by ID.
    pub async fn find_one(&self, id: i64) -> AppResult<Recruit> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Merge the provided fields into an existing recruit. An empty patch
    /// returns the record without writing it.
    pub async fn update(&self, id: i64, patch: RecruitPatch) -> AppResult<Recruit> {
        let mut recruit = self.find_one(id).await?;
        if patch.is_empty() {
            return Ok(recruit);
        }
        patch.apply_to(&mut recruit);

        let updated = self
            .store
            .update(&recruit)
            .await
            .map_err(|e| {
                translate(e, || {
                    format!(
                        "Another recruit already exists with student ID \"{}\".",
                        recruit.student_id
                    )
                })
            })?
            .ok_or_else(|| not_found(id))?;

        info!(recruit_id = id, "Recruit updated");
        Ok(updated)
    }

    /// Delete an existing recruit.
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        let recruit = self.find_one(id).await?;
        if !self.store.delete(recruit.id).await? {
            return Err(not_found(id));
        }
        info!(recruit_id = id, "Recruit removed");
        Ok(())
    }

    /// Number of stored recruits.
    pub async fn count(&self) -> AppResult<u64> {
        Ok(self.store.count().await?)
    }

    /// Wait up to `grace` for queued confirmation emails. `false` means
    /// some were still sending when the window closed.
    pub async fn drain_notifications(&self, grace: Duration) -> bool {
        self.notifier.drain(grace).await
    }

    /// Whether the record store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Recruit with ID {id} not found"))
}

/// Map a failed write to the error the caller sees.
fn translate(err: StoreError, student_id_conflict: impl FnOnce() -> String) -> AppError {
    if err.violates(STUDENT_ID_CONSTRAINT) {
        return AppError::conflict(student_id_conflict());
    }
    match err {
        StoreError::UniqueViolation { .. } => {
            AppError::conflict("A recruit with these details already exists.")
        }
        StoreError::Rejected(message) => {
            AppError::bad_request(format!("Database error: {message}"))
        }
        StoreError::Unavailable(message) => {
            error!(error = %message, "Record store unavailable");
            AppError::internal(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use recruit_core::ErrorKind;
    use recruit_database::StoreResult;
    use recruit_database::memory::MemoryRecruitStore;
    use recruit_mail::{Mailer, OutgoingMail};

    use super::*;

    #[derive(Debug)]
    struct ChannelMailer(mpsc::UnboundedSender<OutgoingMail>);

    #[async_trait]
    impl Mailer for ChannelMailer {
        async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
            let _ = self.0.send(mail);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenMailer;

    #[async_trait]
    impl Mailer for BrokenMailer {
        async fn send(&self, _mail: OutgoingMail) -> AppResult<()> {
            Err(AppError::external_service("relay refused"))
        }
    }

    #[derive(Debug)]
    struct RejectingStore(fn() -> StoreError);

    #[async_trait]
    impl RecruitStore for RejectingStore {
        async fn insert(&self, _: &NewRecruit) -> StoreResult<Recruit> {
            Err((self.0)())
        }
        async fn find_all(&self) -> StoreResult<Vec<Recruit>> {
            Err((self.0)())
        }
        async fn find_by_id(&self, _: i64) -> StoreResult<Option<Recruit>> {
            Err((self.0)())
        }
        async fn update(&self, _: &Recruit) -> StoreResult<Option<Recruit>> {
            Err((self.0)())
        }
        async fn delete(&self, _: i64) -> StoreResult<bool> {
            Err((self.0)())
        }
        async fn count(&self) -> StoreResult<u64> {
            Err((self.0)())
        }
        async fn health_check(&self) -> StoreResult<bool> {
            Err((self.0)())
        }
    }

    fn submission(student_id: &str) -> NewRecruit {
        NewRecruit {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            student_id: student_id.into(),
            personal_email: "ada@example.com".into(),
            gsuite_email: "ada@g.example.edu".into(),
            phone_number: "01700000000".into(),
            enrollment_semester: "Spring 2023".into(),
            residential_semester: "Summer 2023".into(),
            preferred_department: "it".into(),
            preferred_department_2: "rpm".into(),
            about: "I build analytical engines.".into(),
            facebook_link: "https://facebook.com/ada".into(),
            ..NewRecruit::default()
        }
    }

    fn service_with(store: Arc<dyn RecruitStore>, mailer: Arc<dyn Mailer>) -> RecruitService {
        RecruitService::new(store, Arc::new(ConfirmationNotifier::new(mailer)))
    }

    fn memory_service() -> (RecruitService, mpsc::UnboundedReceiver<OutgoingMail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = service_with(
            Arc::new(MemoryRecruitStore::new()),
            Arc::new(ChannelMailer(tx)),
        );
        (service, rx)
    }

    #[tokio::test]
    async fn create_stores_and_sends_confirmation() {
        let (service, mut rx) = memory_service();
        let recruit = service.create(submission("1001")).await.unwrap();
        assert_eq!(recruit.id, 1);
        assert_eq!(recruit.hobbies, None);

        let mail = rx.recv().await.unwrap();
        assert_eq!(mail.to, "ada@example.com");
        assert_eq!(mail.subject, "Application received");
    }

    #[tokio::test]
    async fn drain_waits_for_queued_confirmation() {
        let (service, mut rx) = memory_service();
        service.create(submission("1001")).await.unwrap();

        assert!(service.drain_notifications(Duration::from_secs(5)).await);
        assert_eq!(rx.try_recv().unwrap().to, "ada@example.com");
    }

    #[tokio::test]
    async fn blank_optionals_are_stored_as_null() {
        let (service, _rx) = memory_service();
        let mut input = submission("1001");
        input.github_link = Some(String::new());
        let recruit = service.create(input).await.unwrap();
        assert_eq!(recruit.github_link, None);
    }

    #[tokio::test]
    async fn duplicate_student_id_conflicts_with_id_in_message() {
        let (service, _rx) = memory_service();
        service.create(submission("1001")).await.unwrap();
        let err = service.create(submission("1001")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(
            err.message,
            "A recruit with student ID \"1001\" has already been submitted. Each student can only submit once."
        );
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn mail_failure_does_not_fail_create() {
        let service = service_with(Arc::new(MemoryRecruitStore::new()), Arc::new(BrokenMailer));
        let recruit = service.create(submission("1001")).await.unwrap();
        assert_eq!(service.find_one(recruit.id).await.unwrap(), recruit);
    }

    #[tokio::test]
    async fn find_one_missing_is_not_found() {
        let (service, _rx) = memory_service();
        let err = service.find_one(99).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Recruit with ID 99 not found");
    }

    #[tokio::test]
    async fn update_changes_fields_and_keeps_identity() {
        let (service, _rx) = memory_service();
        let created = service.create(submission("1001")).await.unwrap();
        let patch = RecruitPatch {
            phone_number: Some("01999999999".into()),
            ..RecruitPatch::default()
        };
        let updated = service.update(created.id, patch).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.phone_number, "01999999999");
        assert_eq!(updated.first_name, "Ada");
    }

    #[tokio::test]
    async fn update_to_taken_student_id_conflicts() {
        let (service, _rx) = memory_service();
        service.create(submission("1001")).await.unwrap();
        let second = service.create(submission("1002")).await.unwrap();
        let patch = RecruitPatch {
            student_id: Some("1001".into()),
            ..RecruitPatch::default()
        };
        let err = service.update(second.id, patch).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "Another recruit already exists with student ID \"1001\".");
    }

    #[tokio::test]
    async fn empty_update_leaves_record_untouched() {
        let (service, _rx) = memory_service();
        let created = service.create(submission("1001")).await.unwrap();
        let same = service.update(created.id, RecruitPatch::default()).await.unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let (service, _rx) = memory_service();
        let err = service.update(5, RecruitPatch::default()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn remove_then_find_is_not_found() {
        let (service, _rx) = memory_service();
        let created = service.create(submission("1001")).await.unwrap();
        service.remove(created.id).await.unwrap();
        assert_eq!(service.find_one(created.id).await.unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(service.remove(created.id).await.unwrap_err().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn other_unique_violation_is_generic_conflict() {
        let store = RejectingStore(|| StoreError::UniqueViolation {
            constraint: "recruits_phone_key".into(),
            message: "dup".into(),
        });
        let service = service_with(Arc::new(store), Arc::new(BrokenMailer));
        let err = service.create(submission("1001")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "A recruit with these details already exists.");
    }

    #[tokio::test]
    async fn rejection_is_bad_request_and_outage_is_internal() {
        let rejected = service_with(
            Arc::new(RejectingStore(|| StoreError::Rejected("value too long".into()))),
            Arc::new(BrokenMailer),
        );
        let err = rejected.create(submission("1001")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(err.message, "Database error: value too long");

        let down = service_with(
            Arc::new(RejectingStore(|| StoreError::Unavailable("pool timed out".into()))),
            Arc::new(BrokenMailer),
        );
        let err = down.create(submission("1001")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
        assert!(!down.store_healthy().await);
    }
}
