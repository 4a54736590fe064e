//! Fire-and-forget confirmation email after a submission.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

use recruit_entity::recruit::Recruit;
use recruit_mail::Mailer;
use recruit_mail::template::confirmation;

/// Sends the applicant confirmation on a tracked background task.
#[derive(Debug, Clone)]
pub struct ConfirmationNotifier {
    mailer: Arc<dyn Mailer>,
    tasks: TaskTracker,
}

impl ConfirmationNotifier {
    /// Creates a notifier over the given transport.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self {
            mailer,
            tasks: TaskTracker::new(),
        }
    }

    /// Render and send the confirmation in the background.
    ///
    /// One attempt; failures are logged and never reach the caller.
    pub fn notify(&self, recruit: &Recruit) -> JoinHandle<()> {
        let mailer = Arc::clone(&self.mailer);
        let mail = confirmation(recruit);
        let recruit_id = recruit.id;

        self.tasks.spawn(async move {
            let to = mail.to.clone();
            match mailer.send(mail).await {
                Ok(()) => info!(recruit_id, to = %to, "Confirmation email sent"),
                Err(e) => warn!(recruit_id, to = %to, error = %e, "Confirmation email failed"),
            }
        })
    }

    /// Sends still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Wait up to `grace` for running sends to finish.
    ///
    /// Returns `true` when every send completed in time. Sends started
    /// after this call are still tracked and awaited.
    pub async fn drain(&self, grace: Duration) -> bool {
        self.tasks.close();
        let pending = self.tasks.len();
        if pending == 0 {
            return true;
        }

        info!(pending, grace_seconds = grace.as_secs(), "Waiting for confirmation emails");
        match tokio::time::timeout(grace, self.tasks.wait()).await {
            Ok(()) => true,
            Err(_) => {
                warn!(pending = self.tasks.len(), "Confirmation emails abandoned at shutdown");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::mpsc;

    use recruit_core::result::AppResult;
    use recruit_mail::OutgoingMail;

    use super::*;

    /// Waits before handing the mail over.
    #[derive(Debug)]
    struct SlowMailer {
        delay: Duration,
        sent: mpsc::UnboundedSender<OutgoingMail>,
    }

    #[async_trait]
    impl Mailer for SlowMailer {
        async fn send(&self, mail: OutgoingMail) -> AppResult<()> {
            tokio::time::sleep(self.delay).await;
            let _ = self.sent.send(mail);
            Ok(())
        }
    }

    fn recruit() -> Recruit {
        let now = Utc::now();
        Recruit {
            id: 7,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            student_id: "22101001".into(),
            personal_email: "ada@example.com".into(),
            gsuite_email: "ada@g.example.edu".into(),
            phone_number: "01700000000".into(),
            enrollment_semester: "Spring 2023".into(),
            residential_semester: "Summer 2023".into(),
            current_semester: "Fall 2025".into(),
            preferred_department: "it".into(),
            preferred_department_2: "rpm".into(),
            hobbies: None,
            about: "Analytical engines.".into(),
            skills: None,
            facebook_link: "https://facebook.com/ada".into(),
            linkedin_link: None,
            github_link: None,
            portfolio_link: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn notifier(delay: Duration) -> (ConfirmationNotifier, mpsc::UnboundedReceiver<OutgoingMail>) {
        let (sent, rx) = mpsc::unbounded_channel();
        (
            ConfirmationNotifier::new(Arc::new(SlowMailer { delay, sent })),
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn drain_waits_for_slow_send_inside_grace() {
        let (notifier, mut rx) = notifier(Duration::from_secs(3));
        notifier.notify(&recruit());
        assert_eq!(notifier.in_flight(), 1);

        assert!(notifier.drain(Duration::from_secs(10)).await);
        assert_eq!(notifier.in_flight(), 0);
        assert_eq!(rx.try_recv().unwrap().to, "ada@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn drain_gives_up_after_grace() {
        let (notifier, mut rx) = notifier(Duration::from_secs(30));
        notifier.notify(&recruit());

        assert!(!notifier.drain(Duration::from_secs(10)).await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn drain_with_nothing_running_returns_at_once() {
        let (notifier, _rx) = notifier(Duration::ZERO);
        assert!(notifier.drain(Duration::from_secs(10)).await);
    }
}
