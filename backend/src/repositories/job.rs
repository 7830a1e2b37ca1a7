//! Job repository for database operations
//!
//! Every query that touches an existing job filters by both the job id
//! and the owning user in a single statement, so a job owned by someone
//! else is indistinguishable from a missing one.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Job record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub status: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for updating a job; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateJobFields {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
}

/// One (year, month) bucket of created jobs
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MonthlyCountRow {
    pub year: i32,
    pub month: i32,
    pub count: i64,
}

/// Job repository for database operations
pub struct JobRepository;

impl JobRepository {
    /// List all jobs owned by a user, oldest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, company, position, status, created_by, created_at, updated_at
            FROM jobs
            WHERE created_by = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(jobs)
    }

    /// Find a single job by id and owner
    pub async fn find_owned(
        pool: &PgPool,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            SELECT id, company, position, status, created_by, created_at, updated_at
            FROM jobs
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Create a job owned by the given user
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        company: &str,
        position: &str,
        status: &str,
    ) -> Result<JobRecord> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            INSERT INTO jobs (company, position, status, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, company, position, status, created_by, created_at, updated_at
            "#,
        )
        .bind(company)
        .bind(position)
        .bind(status)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// Update a job matching both id and owner, returning the new row
    ///
    /// Returns `None` when no job matches the (id, owner) pair.
    pub async fn update_owned(
        pool: &PgPool,
        user_id: Uuid,
        job_id: Uuid,
        fields: UpdateJobFields,
    ) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(
            r#"
            UPDATE jobs SET
                company = COALESCE($3, company),
                position = COALESCE($4, position),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $1 AND created_by = $2
            RETURNING id, company, position, status, created_by, created_at, updated_at
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .bind(fields.company)
        .bind(fields.position)
        .bind(fields.status)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Delete a job matching both id and owner
    ///
    /// Returns `true` when a row was deleted.
    pub async fn delete_owned(pool: &PgPool, user_id: Uuid, job_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM jobs
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count jobs per status for a user
    pub async fn status_counts(pool: &PgPool, user_id: Uuid) -> Result<Vec<(String, i64)>> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT status, COUNT(*)
            FROM jobs
            WHERE created_by = $1
            GROUP BY status
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }

    /// Count jobs per (year, month) bucket, most recent six buckets first
    pub async fn monthly_counts(pool: &PgPool, user_id: Uuid) -> Result<Vec<MonthlyCountRow>> {
        let counts = sqlx::query_as::<_, MonthlyCountRow>(
            r#"
            SELECT EXTRACT(YEAR FROM created_at)::int4 AS year,
                   EXTRACT(MONTH FROM created_at)::int4 AS month,
                   COUNT(*) AS count
            FROM jobs
            WHERE created_by = $1
            GROUP BY year, month
            ORDER BY year DESC, month DESC
            LIMIT 6
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }
}
