//! Statistic repository

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{error::AppResult, models::Statistic};

/// Repository for per-competition statistics
pub struct StatisticRepository;

impl StatisticRepository {
    pub async fn create(
        pool: &PgPool,
        average_time: Option<Decimal>,
        accuracy_rate: Option<Decimal>,
        hardest_problem: Option<&str>,
        competition_id: i32,
    ) -> AppResult<Statistic> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            INSERT INTO statistics (average_time, accuracy_rate, hardest_problem, competition_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(average_time)
        .bind(accuracy_rate)
        .bind(hardest_problem)
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok(statistic)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Statistic>> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"SELECT * FROM statistics WHERE statistic_id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(statistic)
    }

    /// Partial update; the three figures are tri-state like the request fields
    pub async fn update(
        pool: &PgPool,
        id: i32,
        average_time: Option<Option<Decimal>>,
        accuracy_rate: Option<Option<Decimal>>,
        hardest_problem: Option<Option<&str>>,
        competition_id: Option<i32>,
    ) -> AppResult<Option<Statistic>> {
        let statistic = sqlx::query_as::<_, Statistic>(
            r#"
            UPDATE statistics
            SET
                average_time = CASE WHEN $2 THEN $3 ELSE average_time END,
                accuracy_rate = CASE WHEN $4 THEN $5 ELSE accuracy_rate END,
                hardest_problem = CASE WHEN $6 THEN $7 ELSE hardest_problem END,
                competition_id = COALESCE($8, competition_id)
            WHERE statistic_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(average_time.is_some())
        .bind(average_time.flatten())
        .bind(accuracy_rate.is_some())
        .bind(accuracy_rate.flatten())
        .bind(hardest_problem.is_some())
        .bind(hardest_problem.flatten())
        .bind(competition_id)
        .fetch_optional(pool)
        .await?;

        Ok(statistic)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM statistics WHERE statistic_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<Statistic>> {
        let statistics = sqlx::query_as::<_, Statistic>(
            r#"SELECT * FROM statistics ORDER BY statistic_id OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(statistics)
    }
}
