//! In-memory recruit store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use recruit_entity::recruit::{NewRecruit, Recruit};

use crate::error::{StoreError, StoreResult};
use crate::store::{RecruitStore, STUDENT_ID_CONSTRAINT};

/// Recruit store backed by an ordered map.
#[derive(Debug)]
pub struct MemoryRecruitStore {
    rows: RwLock<BTreeMap<i64, Recruit>>,
    next_id: AtomicI64,
}

impl MemoryRecruitStore {
    /// Create an empty store. Identifiers start at 1.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryRecruitStore {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_student_id(student_id: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: STUDENT_ID_CONSTRAINT.to_string(),
        message: format!(
            "duplicate key value violates unique constraint \"{STUDENT_ID_CONSTRAINT}\": student_id={student_id}"
        ),
    }
}

#[async_trait]
impl RecruitStore for MemoryRecruitStore {
    async fn insert(&self, r: &NewRecruit) -> StoreResult<Recruit> {
        let mut rows = self.rows.write().await;
        if rows.values().any(|existing| existing.student_id == r.student_id) {
            return Err(duplicate_student_id(&r.student_id));
        }

        let now = Utc::now();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let recruit = Recruit {
            id,
            first_name: r.first_name.clone(),
            last_name: r.last_name.clone(),
            student_id: r.student_id.clone(),
            personal_email: r.personal_email.clone(),
            gsuite_email: r.gsuite_email.clone(),
            phone_number: r.phone_number.clone(),
            enrollment_semester: r.enrollment_semester.clone(),
            residential_semester: r.residential_semester.clone(),
            current_semester: r.current_semester.clone(),
            preferred_department: r.preferred_department.clone(),
            preferred_department_2: r.preferred_department_2.clone(),
            hobbies: r.hobbies.clone(),
            about: r.about.clone(),
            skills: r.skills.clone(),
            facebook_link: r.facebook_link.clone(),
            linkedin_link: r.linkedin_link.clone(),
            github_link: r.github_link.clone(),
            portfolio_link: r.portfolio_link.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, recruit.clone());
        debug!(recruit_id = id, "Inserted recruit");
        Ok(recruit)
    }

    async fn find_all(&self) -> StoreResult<Vec<Recruit>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Recruit>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn update(&self, recruit: &Recruit) -> StoreResult<Option<Recruit>> {
        let mut rows = self.rows.write().await;
        if rows
            .values()
            .any(|other| other.id != recruit.id && other.student_id == recruit.student_id)
        {
            return Err(duplicate_student_id(&recruit.student_id));
        }

        let Some(slot) = rows.get_mut(&recruit.id) else {
            return Ok(None);
        };
        let created_at = slot.created_at;
        *slot = Recruit {
            created_at,
            updated_at: Utc::now(),
            ..recruit.clone()
        };
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}
