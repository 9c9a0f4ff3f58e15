//! Collaborator repository

use sqlx::{PgExecutor, PgPool};

use crate::{
    error::AppResult,
    models::{Collaborator, CollaboratorRole},
};

/// Repository for collaborator database operations
pub struct CollaboratorRepository;

impl CollaboratorRepository {
    /// Attach the collaborator extension to an existing user
    pub async fn create(
        pool: &PgPool,
        user_id: i32,
        role: CollaboratorRole,
        team_id: Option<i32>,
        institution: Option<&str>,
    ) -> AppResult<Collaborator> {
        let collaborator = sqlx::query_as::<_, Collaborator>(
            r#"
            INSERT INTO collaborators (user_id, role, team_id, institution)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(role)
        .bind(team_id)
        .bind(institution)
        .fetch_one(pool)
        .await?;

        Ok(collaborator)
    }

    /// Find collaborator by user ID
    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> AppResult<Option<Collaborator>> {
        let collaborator = sqlx::query_as::<_, Collaborator>(
            r#"SELECT * FROM collaborators WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(collaborator)
    }

    /// List collaborators with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Collaborator>> {
        let collaborators = sqlx::query_as::<_, Collaborator>(
            r#"SELECT * FROM collaborators ORDER BY user_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(collaborators)
    }

    /// Update collaborator.
    ///
    /// `team_id` and `institution` are tri-state: `None` keeps the stored value,
    /// `Some(None)` clears it, `Some(Some(v))` replaces it.
    pub async fn update(
        pool: &PgPool,
        user_id: i32,
        role: Option<CollaboratorRole>,
        team_id: Option<Option<i32>>,
        institution: Option<Option<&str>>,
    ) -> AppResult<Option<Collaborator>> {
        let collaborator = sqlx::query_as::<_, Collaborator>(
            r#"
            UPDATE collaborators
            SET
                role = COALESCE($2, role),
                team_id = CASE WHEN $3 THEN $4 ELSE team_id END,
                institution = CASE WHEN $5 THEN $6 ELSE institution END
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(role)
        .bind(team_id.is_some())
        .bind(team_id.flatten())
        .bind(institution.is_some())
        .bind(institution.flatten())
        .fetch_optional(pool)
        .await?;

        Ok(collaborator)
    }

    /// Delete collaborator
    pub async fn delete(pool: &PgPool, user_id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM collaborators WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Move the given collaborators into `team_id`; returns how many rows matched
    pub async fn assign_team<'e, E>(executor: E, team_id: i32, user_ids: &[i32]) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"UPDATE collaborators SET team_id = $1 WHERE user_id = ANY($2)"#,
        )
        .bind(team_id)
        .bind(user_ids)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Unassign every member of `team_id` whose id is not in `keep`
    pub async fn release_team<'e, E>(executor: E, team_id: i32, keep: &[i32]) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            UPDATE collaborators
            SET team_id = NULL
            WHERE team_id = $1 AND NOT (user_id = ANY($2))
            "#,
        )
        .bind(team_id)
        .bind(keep)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
