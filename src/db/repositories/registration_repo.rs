//! Registration repository

use sqlx::{PgExecutor, PgPool};

use crate::{error::AppResult, models::Registration};

/// Repository for registration database operations
pub struct RegistrationRepository;

impl RegistrationRepository {
    /// Register a participant for a competition
    pub async fn create<'e, E>(
        executor: E,
        participant_user_id: i32,
        competition_id: i32,
        category: Option<&str>,
    ) -> AppResult<Registration>
    where
        E: PgExecutor<'e>,
    {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (category, participant_user_id, competition_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(category)
        .bind(participant_user_id)
        .bind(competition_id)
        .fetch_one(executor)
        .await?;

        Ok(registration)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i32) -> AppResult<Option<Registration>>
    where
        E: PgExecutor<'e>,
    {
        let registration = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registrations WHERE registration_id = $1"#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(registration)
    }

    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"SELECT * FROM registrations ORDER BY registration_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(registrations)
    }

    /// Registrations of one competition
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: i32,
    ) -> AppResult<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT * FROM registrations
            WHERE competition_id = $1
            ORDER BY registration_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(registrations)
    }

    /// Partial update; `category` is tri-state
    pub async fn update<'e, E>(
        executor: E,
        id: i32,
        category: Option<Option<&str>>,
        participant_user_id: Option<i32>,
        competition_id: Option<i32>,
    ) -> AppResult<Option<Registration>>
    where
        E: PgExecutor<'e>,
    {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET
                category = CASE WHEN $2 THEN $3 ELSE category END,
                participant_user_id = COALESCE($4, participant_user_id),
                competition_id = COALESCE($5, competition_id)
            WHERE registration_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(category.is_some())
        .bind(category.flatten())
        .bind(participant_user_id)
        .bind(competition_id)
        .fetch_optional(executor)
        .await?;

        Ok(registration)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM registrations WHERE registration_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count registrations of a competition
    pub async fn count_by_competition<'e, E>(executor: E, competition_id: i32) -> AppResult<i64>
    where
        E: PgExecutor<'e>,
    {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM registrations WHERE competition_id = $1"#,
        )
        .bind(competition_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Count competitions a participant is registered for
    pub async fn count_by_participant(pool: &PgPool, participant_user_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM registrations WHERE participant_user_id = $1"#,
        )
        .bind(participant_user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
