//! Participant repository

use sqlx::{PgExecutor, PgPool};

use crate::{error::AppResult, models::Participant};

/// Repository for participant database operations
pub struct ParticipantRepository;

impl ParticipantRepository {
    /// Attach the participant extension to an existing user
    pub async fn create<'e, E>(
        executor: E,
        user_id: i32,
        institution: Option<&str>,
    ) -> AppResult<Participant>
    where
        E: PgExecutor<'e>,
    {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (user_id, institution)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(institution)
        .fetch_one(executor)
        .await?;

        Ok(participant)
    }

    /// Find participant by user ID
    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> AppResult<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"SELECT * FROM participants WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(participant)
    }

    /// List participants with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"SELECT * FROM participants ORDER BY user_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(participants)
    }

    /// Update participant; `Some(None)` clears the institution
    pub async fn update(
        pool: &PgPool,
        user_id: i32,
        institution: Option<Option<&str>>,
    ) -> AppResult<Option<Participant>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET institution = CASE WHEN $2 THEN $3 ELSE institution END
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(institution.is_some())
        .bind(institution.flatten())
        .fetch_optional(pool)
        .await?;

        Ok(participant)
    }

    /// Delete participant
    pub async fn delete(pool: &PgPool, user_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM participants WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
