//! Problem repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Difficulty, Problem},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        title: &str,
        difficulty: Difficulty,
        link: &str,
        competition_id: i32,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, difficulty, link, competition_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(difficulty)
        .bind(link)
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Problem>> {
        let problem =
            sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE problem_id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(problem)
    }

    /// Update problem
    pub async fn update(
        pool: &PgPool,
        id: i32,
        title: Option<&str>,
        difficulty: Option<Difficulty>,
        link: Option<&str>,
        competition_id: Option<i32>,
    ) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                title = COALESCE($2, title),
                difficulty = COALESCE($3, difficulty),
                link = COALESCE($4, link),
                competition_id = COALESCE($5, competition_id)
            WHERE problem_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(difficulty)
        .bind(link)
        .bind(competition_id)
        .fetch_optional(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problems WHERE problem_id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List problems with pagination, optionally scoped to one competition
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        competition_id: Option<i32>,
    ) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE ($1::INTEGER IS NULL OR competition_id = $1)
            ORDER BY problem_id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(competition_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }
}
