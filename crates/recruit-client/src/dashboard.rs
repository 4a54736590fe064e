//! Reviewer dashboard: token-gated list, detail panel, delete, logout.

use std::sync::Arc;

use tracing::{info, warn};

use recruit_entity::recruit::{Recruit, RecruitPatch};
use recruit_entity::recruit::department::{full_name, short_label};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::login::{LoginCredentials, LoginOutcome, login};
use crate::notice::Notice;
use crate::route::Route;
use crate::token::TokenStore;

/// One line of the recruits table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruitRow {
    /// Record ID.
    pub id: i64,
    /// `"First Last"`.
    pub name: String,
    /// Student ID.
    pub student_id: String,
    /// Personal email.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// First-choice department abbreviation.
    pub department: String,
    /// Second-choice department abbreviation.
    pub department_2: String,
    /// Current semester.
    pub semester: String,
    /// Submission date, `YYYY-MM-DD`.
    pub applied: String,
}

impl From<&Recruit> for RecruitRow {
    fn from(r: &Recruit) -> Self {
        Self {
            id: r.id,
            name: r.full_name(),
            student_id: r.student_id.clone(),
            email: r.personal_email.clone(),
            phone: r.phone_number.clone(),
            department: short_label(&r.preferred_department),
            department_2: short_label(&r.preferred_department_2),
            semester: r.current_semester.clone(),
            applied: r.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// The detail panel for one recruit.
#[derive(Debug, Clone, PartialEq)]
pub struct RecruitDetail {
    /// The full stored record.
    pub recruit: Recruit,
    /// First-choice department, full name.
    pub department: String,
    /// Second-choice department, full name.
    pub department_2: String,
}

impl From<&Recruit> for RecruitDetail {
    fn from(r: &Recruit) -> Self {
        Self {
            recruit: r.clone(),
            department: full_name(&r.preferred_department),
            department_2: full_name(&r.preferred_department_2),
        }
    }
}

/// Result of a dashboard action.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutcome {
    /// The action succeeded; `rows` reflects the server.
    Ready,
    /// Leave the dashboard.
    Redirect {
        /// Where to go.
        route: Route,
        /// Why, when there is something to say.
        notice: Option<Notice>,
    },
    /// The action failed; stay and show the notice.
    Failed(Notice),
}

/// Dashboard controller. Fetches once per [`Dashboard::open`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: ApiClient,
    tokens: Arc<dyn TokenStore>,
    recruits: Vec<Recruit>,
}

impl Dashboard {
    /// A dashboard using `tokens` for its bearer token.
    pub fn new(client: ApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client,
            tokens,
            recruits: Vec::new(),
        }
    }

    /// Load the recruit list, or send the user to login.
    pub async fn open(&mut self) -> DashboardOutcome {
        let token = match self.token().await {
            Ok(Some(token)) => token,
            Ok(None) => return redirect_to_login(None),
            Err(notice) => return DashboardOutcome::Failed(notice),
        };

        match self.client.list(&token).await {
            Ok(recruits) => {
                info!(count = recruits.len(), "Recruits loaded");
                self.recruits = recruits;
                DashboardOutcome::Ready
            }
            Err(err) => self.handle_failure(err, "Failed to fetch recruits").await,
        }
    }

    /// Table rows for the loaded recruits.
    pub fn rows(&self) -> Vec<RecruitRow> {
        self.recruits.iter().map(RecruitRow::from).collect()
    }

    /// Detail panel for a loaded recruit.
    pub fn select(&self, id: i64) -> Option<RecruitDetail> {
        self.recruits
            .iter()
            .find(|r| r.id == id)
            .map(RecruitDetail::from)
    }

    /// Delete a recruit and drop it from the loaded list.
    pub async fn remove(&mut self, id: i64) -> DashboardOutcome {
        let token = match self.token().await {
            Ok(Some(token)) => token,
            Ok(None) => return redirect_to_login(None),
            Err(notice) => return DashboardOutcome::Failed(notice),
        };

        match self.client.delete(&token, id).await {
            Ok(()) => {
                info!(recruit_id = id, "Recruit deleted");
                self.recruits.retain(|r| r.id != id);
                DashboardOutcome::Ready
            }
            Err(err) => self.handle_failure(err, "Failed to delete recruit").await,
        }
    }

    /// Apply a partial update and replace the loaded copy with the result.
    pub async fn update(&mut self, id: i64, patch: &RecruitPatch) -> DashboardOutcome {
        let token = match self.token().await {
            Ok(Some(token)) => token,
            Ok(None) => return redirect_to_login(None),
            Err(notice) => return DashboardOutcome::Failed(notice),
        };

        match self.client.update(&token, id, patch).await {
            Ok(updated) => {
                info!(recruit_id = id, "Recruit updated");
                match self.recruits.iter_mut().find(|r| r.id == id) {
                    Some(slot) => *slot = updated,
                    None => self.recruits.push(updated),
                }
                DashboardOutcome::Ready
            }
            Err(err) => self.handle_failure(err, "Failed to update recruit").await,
        }
    }

    /// Log in and keep the token for later opens.
    pub async fn login(&self, credentials: &LoginCredentials) -> LoginOutcome {
        login(&self.client, self.tokens.as_ref(), credentials).await
    }

    /// Forget the token.
    pub async fn logout(&mut self) -> DashboardOutcome {
        self.recruits.clear();
        match self.tokens.clear().await {
            Ok(()) => redirect_to_login(None),
            Err(err) => DashboardOutcome::Failed(Notice::error("Error", err.to_string())),
        }
    }

    async fn token(&self) -> Result<Option<String>, Notice> {
        self.tokens
            .load()
            .await
            .map_err(|err| Notice::error("Error", err.to_string()))
    }

    /// A rejected token is discarded; anything else stays on the page.
    async fn handle_failure(&mut self, err: ClientError, fallback: &str) -> DashboardOutcome {
        if err.is_unauthorized() {
            warn!("Session expired, discarding token");
            if let Err(clear_err) = self.tokens.clear().await {
                warn!(error = %clear_err, "Failed to discard token");
            }
            self.recruits.clear();
            return redirect_to_login(Some(Notice::error("Session expired", "Please login again")));
        }

        let description = match &err {
            ClientError::Http { message, .. } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            ClientError::Network(_) | ClientError::Storage(_) => {
                "Failed to load recruits".to_string()
            }
        };
        warn!(error = %err, "Dashboard request failed");
        DashboardOutcome::Failed(Notice::error("Error", description))
    }
}

fn redirect_to_login(notice: Option<Notice>) -> DashboardOutcome {
    DashboardOutcome::Redirect {
        route: Route::Login,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::token::MemoryTokenStore;

    fn recruit() -> Recruit {
        let at = Utc.with_ymd_and_hms(2025, 9, 14, 10, 30, 0).unwrap();
        Recruit {
            id: 4,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            student_id: "22101001".into(),
            personal_email: "ada@example.com".into(),
            gsuite_email: "ada@g.example.edu".into(),
            phone_number: "01700000000".into(),
            enrollment_semester: "Spring 2023".into(),
            residential_semester: "Summer 2023".into(),
            current_semester: "Fall 2025".into(),
            preferred_department: "rpm".into(),
            preferred_department_2: "xyz".into(),
            hobbies: None,
            about: "Analytical engines.".into(),
            skills: None,
            facebook_link: "https://facebook.com/ada".into(),
            linkedin_link: None,
            github_link: None,
            portfolio_link: None,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn row_uses_short_labels_and_date() {
        let row = RecruitRow::from(&recruit());
        assert_eq!(row.name, "Ada Lovelace");
        assert_eq!(row.department, "RPM");
        assert_eq!(row.department_2, "xyz");
        assert_eq!(row.applied, "2025-09-14");
    }

    #[test]
    fn detail_uses_full_names() {
        let detail = RecruitDetail::from(&recruit());
        assert_eq!(detail.department, "Research and Project Management Department");
        assert_eq!(detail.department_2, "xyz");
    }

    #[tokio::test]
    async fn open_without_token_redirects_to_login() {
        let mut dashboard = Dashboard::new(
            ApiClient::new("http://127.0.0.1:9"),
            Arc::new(MemoryTokenStore::new()),
        );
        assert_eq!(dashboard.open().await, redirect_to_login(None));
    }

    #[tokio::test]
    async fn logout_discards_token() {
        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        let mut dashboard = Dashboard::new(ApiClient::new("http://127.0.0.1:9"), tokens.clone());
        assert_eq!(dashboard.logout().await, redirect_to_login(None));
        assert_eq!(tokens.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn unreachable_server_keeps_token() {
        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        let mut dashboard = Dashboard::new(ApiClient::new("http://127.0.0.1:9"), tokens.clone());
        match dashboard.open().await {
            DashboardOutcome::Failed(notice) => {
                assert_eq!(notice.title, "Error");
                assert_eq!(notice.description, "Failed to load recruits");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(tokens.load().await.unwrap().as_deref(), Some("t"));
    }
}
