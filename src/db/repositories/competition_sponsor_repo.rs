//! Competition-sponsor link repository

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{error::AppResult, models::CompetitionSponsor};

/// Repository for sponsorship link operations
pub struct CompetitionSponsorRepository;

impl CompetitionSponsorRepository {
    /// Link a sponsor to a competition
    pub async fn create(
        pool: &PgPool,
        competition_id: i32,
        sponsor_user_id: i32,
        contribution: Decimal,
    ) -> AppResult<CompetitionSponsor> {
        let link = sqlx::query_as::<_, CompetitionSponsor>(
            r#"
            INSERT INTO competition_sponsors (competition_id, sponsor_user_id, contribution)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(competition_id)
        .bind(sponsor_user_id)
        .bind(contribution)
        .fetch_one(pool)
        .await?;

        Ok(link)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<CompetitionSponsor>> {
        let link = sqlx::query_as::<_, CompetitionSponsor>(
            r#"SELECT * FROM competition_sponsors WHERE link_id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(link)
    }

    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<CompetitionSponsor>> {
        let links = sqlx::query_as::<_, CompetitionSponsor>(
            r#"SELECT * FROM competition_sponsors ORDER BY link_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(links)
    }

    /// All sponsorship links of one competition
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: i32,
    ) -> AppResult<Vec<CompetitionSponsor>> {
        let links = sqlx::query_as::<_, CompetitionSponsor>(
            r#"
            SELECT * FROM competition_sponsors
            WHERE competition_id = $1
            ORDER BY link_id
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(links)
    }

    pub async fn update(
        pool: &PgPool,
        id: i32,
        competition_id: Option<i32>,
        sponsor_user_id: Option<i32>,
        contribution: Option<Decimal>,
    ) -> AppResult<Option<CompetitionSponsor>> {
        let link = sqlx::query_as::<_, CompetitionSponsor>(
            r#"
            UPDATE competition_sponsors
            SET
                competition_id = COALESCE($2, competition_id),
                sponsor_user_id = COALESCE($3, sponsor_user_id),
                contribution = COALESCE($4, contribution)
            WHERE link_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(competition_id)
        .bind(sponsor_user_id)
        .bind(contribution)
        .fetch_optional(pool)
        .await?;

        Ok(link)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM competition_sponsors WHERE link_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of competitions a sponsor backs and the sum of its contributions
    pub async fn totals_for_sponsor(pool: &PgPool, sponsor_user_id: i32) -> AppResult<(i64, Decimal)> {
        let totals: (i64, Decimal) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COALESCE(SUM(contribution), 0)
            FROM competition_sponsors
            WHERE sponsor_user_id = $1
            "#,
        )
        .bind(sponsor_user_id)
        .fetch_one(pool)
        .await?;

        Ok(totals)
    }
}
