//! Competition repository

use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgExecutor, PgPool};

use crate::{error::AppResult, models::Competition};

/// Column values for a new competition
pub struct NewCompetition<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub date: NaiveDate,
    pub team_id: i32,
    pub start_time: Option<NaiveTime>,
    pub max_participants: Option<i32>,
    pub description: Option<&'a str>,
}

/// Partial competition update; `None` keeps the stored value.
///
/// Nullable columns take `Some(None)` to clear them.
#[derive(Default)]
pub struct CompetitionChanges<'a> {
    pub name: Option<&'a str>,
    pub location: Option<Option<&'a str>>,
    pub date: Option<NaiveDate>,
    pub team_id: Option<i32>,
    pub start_time: Option<Option<NaiveTime>>,
    pub max_participants: Option<Option<i32>>,
    pub description: Option<Option<&'a str>>,
}

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition
    pub async fn create(pool: &PgPool, new: &NewCompetition<'_>) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (
                name, location, date, team_id, start_time, max_participants, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new.name)
        .bind(new.location)
        .bind(new.date)
        .bind(new.team_id)
        .bind(new.start_time)
        .bind(new.max_participants)
        .bind(new.description)
        .fetch_one(pool)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Competition>> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"SELECT * FROM competitions WHERE competition_id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID and lock its row until the transaction ends.
    ///
    /// Serializes concurrent registrations against the same capacity.
    pub async fn find_for_update<'e, E>(executor: E, id: i32) -> AppResult<Option<Competition>>
    where
        E: PgExecutor<'e>,
    {
        let competition = sqlx::query_as::<_, Competition>(
            r#"SELECT * FROM competitions WHERE competition_id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(competition)
    }

    /// List competitions with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"SELECT * FROM competitions ORDER BY competition_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(competitions)
    }

    /// Update competition
    pub async fn update<'e, E>(
        executor: E,
        id: i32,
        changes: &CompetitionChanges<'_>,
    ) -> AppResult<Option<Competition>>
    where
        E: PgExecutor<'e>,
    {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET
                name = COALESCE($2, name),
                location = CASE WHEN $3 THEN $4 ELSE location END,
                date = COALESCE($5, date),
                team_id = COALESCE($6, team_id),
                start_time = CASE WHEN $7 THEN $8 ELSE start_time END,
                max_participants = CASE WHEN $9 THEN $10 ELSE max_participants END,
                description = CASE WHEN $11 THEN $12 ELSE description END
            WHERE competition_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.location.is_some())
        .bind(changes.location.flatten())
        .bind(changes.date)
        .bind(changes.team_id)
        .bind(changes.start_time.is_some())
        .bind(changes.start_time.flatten())
        .bind(changes.max_participants.is_some())
        .bind(changes.max_participants.flatten())
        .bind(changes.description.is_some())
        .bind(changes.description.flatten())
        .fetch_optional(executor)
        .await?;

        Ok(competition)
    }

    /// Delete competition
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM competitions WHERE competition_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count competitions organized by a team
    pub async fn count_by_team(pool: &PgPool, team_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM competitions WHERE team_id = $1"#,
        )
        .bind(team_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
