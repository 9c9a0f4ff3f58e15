//! Team repository

use sqlx::{PgExecutor, PgPool};

use crate::{error::AppResult, models::Team};

/// Repository for team database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Create a new team
    pub async fn create<'e, E>(executor: E, name: &str) -> AppResult<Team>
    where
        E: PgExecutor<'e>,
    {
        let team = sqlx::query_as::<_, Team>(
            r#"INSERT INTO teams (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(executor)
        .await?;

        Ok(team)
    }

    /// Find team by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(r#"SELECT * FROM teams WHERE team_id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(team)
    }

    /// List teams with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"SELECT * FROM teams ORDER BY team_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(teams)
    }

    /// Update team
    pub async fn update<'e, E>(executor: E, id: i32, name: Option<&str>) -> AppResult<Option<Team>>
    where
        E: PgExecutor<'e>,
    {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = COALESCE($2, name)
            WHERE team_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(executor)
        .await?;

        Ok(team)
    }

    /// Delete team
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM teams WHERE team_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get member count for team
    pub async fn get_member_count(pool: &PgPool, team_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM collaborators WHERE team_id = $1"#,
        )
        .bind(team_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
