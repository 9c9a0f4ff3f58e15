//! Sponsor repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Sponsor};

/// Repository for sponsor database operations
pub struct SponsorRepository;

impl SponsorRepository {
    /// Attach the sponsor extension to an existing user
    pub async fn create(pool: &PgPool, user_id: i32) -> AppResult<Sponsor> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            r#"INSERT INTO sponsors (user_id) VALUES ($1) RETURNING *"#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(sponsor)
    }

    /// Find sponsor by user ID
    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> AppResult<Option<Sponsor>> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            r#"SELECT * FROM sponsors WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(sponsor)
    }

    /// List sponsors with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Sponsor>> {
        let sponsors = sqlx::query_as::<_, Sponsor>(
            r#"SELECT * FROM sponsors ORDER BY user_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(sponsors)
    }

    /// Replace the stored logo
    pub async fn update_logo(pool: &PgPool, user_id: i32, logo: &[u8]) -> AppResult<Option<Sponsor>> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            r#"UPDATE sponsors SET logo = $2 WHERE user_id = $1 RETURNING *"#,
        )
        .bind(user_id)
        .bind(logo)
        .fetch_optional(pool)
        .await?;

        Ok(sponsor)
    }

    /// Delete sponsor
    pub async fn delete(pool: &PgPool, user_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM sponsors WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
