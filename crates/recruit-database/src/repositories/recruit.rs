//! Recruit repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use recruit_entity::recruit::{NewRecruit, Recruit};

use crate::error::StoreResult;
use crate::store::RecruitStore;

/// Repository for the `recruits` table.
#[derive(Debug, Clone)]
pub struct RecruitRepository {
    pool: PgPool,
}

impl RecruitRepository {
    /// Create a new recruit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecruitStore for RecruitRepository {
    async fn insert(&self, r: &NewRecruit) -> StoreResult<Recruit> {
        let recruit = sqlx::query_as::<_, Recruit>(
            r#"
            INSERT INTO recruits (
                first_name, last_name, student_id, personal_email, gsuite_email,
                phone_number, enrollment_semester, residential_semester, current_semester,
                preferred_department, preferred_department_2, hobbies, about, skills,
                facebook_link, linkedin_link, github_link, portfolio_link
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(&r.first_name)
        .bind(&r.last_name)
        .bind(&r.student_id)
        .bind(&r.personal_email)
        .bind(&r.gsuite_email)
        .bind(&r.phone_number)
        .bind(&r.enrollment_semester)
        .bind(&r.residential_semester)
        .bind(&r.current_semester)
        .bind(&r.preferred_department)
        .bind(&r.preferred_department_2)
        .bind(&r.hobbies)
        .bind(&r.about)
        .bind(&r.skills)
        .bind(&r.facebook_link)
        .bind(&r.linkedin_link)
        .bind(&r.github_link)
        .bind(&r.portfolio_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(recruit)
    }

    async fn find_all(&self) -> StoreResult<Vec<Recruit>> {
        let recruits = sqlx::query_as::<_, Recruit>("SELECT * FROM recruits ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(recruits)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Recruit>> {
        let recruit = sqlx::query_as::<_, Recruit>("SELECT * FROM recruits WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(recruit)
    }

    async fn update(&self, r: &Recruit) -> StoreResult<Option<Recruit>> {
        let recruit = sqlx::query_as::<_, Recruit>(
            r#"
            UPDATE recruits SET
                first_name = $2, last_name = $3, student_id = $4, personal_email = $5,
                gsuite_email = $6, phone_number = $7, enrollment_semester = $8,
                residential_semester = $9, current_semester = $10, preferred_department = $11,
                preferred_department_2 = $12, hobbies = $13, about = $14, skills = $15,
                facebook_link = $16, linkedin_link = $17, github_link = $18, portfolio_link = $19,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(r.id)
        .bind(&r.first_name)
        .bind(&r.last_name)
        .bind(&r.student_id)
        .bind(&r.personal_email)
        .bind(&r.gsuite_email)
        .bind(&r.phone_number)
        .bind(&r.enrollment_semester)
        .bind(&r.residential_semester)
        .bind(&r.current_semester)
        .bind(&r.preferred_department)
        .bind(&r.preferred_department_2)
        .bind(&r.hobbies)
        .bind(&r.about)
        .bind(&r.skills)
        .bind(&r.facebook_link)
        .bind(&r.linkedin_link)
        .bind(&r.github_link)
        .bind(&r.portfolio_link)
        .fetch_optional(&self.pool)
        .await?;

        Ok(recruit)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM recruits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> StoreResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recruits")
            .fetch_one(&self.pool)
            .await?;
        Ok(total as u64)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(one == 1)
    }
}
