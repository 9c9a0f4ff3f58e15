//! Problem service

use sqlx::PgPool;

use crate::{
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    handlers::problems::{
        request::{CreateProblemRequest, UpdateProblemRequest},
        response::ProblemResponse,
    },
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// List problems
    pub async fn list_problems(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        competition_id: Option<i32>,
    ) -> AppResult<Vec<ProblemResponse>> {
        let problems = ProblemRepository::list(pool, offset, limit, competition_id).await?;
        Ok(problems.into_iter().map(Into::into).collect())
    }

    /// Create a new problem
    pub async fn create_problem(
        pool: &PgPool,
        payload: CreateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        let problem = ProblemRepository::create(
            pool,
            &payload.title,
            payload.difficulty,
            &payload.link,
            payload.competition_id,
        )
        .await?;

        tracing::info!(
            problem_id = problem.problem_id,
            competition_id = problem.competition_id,
            "Problem created"
        );
        Ok(problem.into())
    }

    /// Get problem by ID
    pub async fn get_problem(pool: &PgPool, id: i32) -> AppResult<ProblemResponse> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Update problem
    pub async fn update_problem(
        pool: &PgPool,
        id: i32,
        payload: UpdateProblemRequest,
    ) -> AppResult<ProblemResponse> {
        ProblemRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.difficulty,
            payload.link.as_deref(),
            payload.competition_id,
        )
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Delete problem; refused while submissions remain
    pub async fn delete_problem(pool: &PgPool, id: i32) -> AppResult<()> {
        let deleted = ProblemRepository::delete(pool, id)
            .await
            .map_err(|e| e.into_delete_conflict("Problem"))?;

        if !deleted {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::Difficulty,
        test_utils::{fixtures, test_app::fresh_pool},
        utils::today,
    };

    fn request(title: &str, competition_id: i32) -> CreateProblemRequest {
        CreateProblemRequest {
            title: title.to_string(),
            difficulty: Difficulty::Medium,
            link: format!("https://judge.example.com/{}", title),
            competition_id,
        }
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_list_filtered_by_competition() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let cup = fixtures::competition(&pool, team.team_id, today(), None).await;
        let open = fixtures::competition(&pool, team.team_id, today(), None).await;

        ProblemService::create_problem(&pool, request("A", cup.competition_id))
            .await
            .unwrap();
        ProblemService::create_problem(&pool, request("B", cup.competition_id))
            .await
            .unwrap();
        ProblemService::create_problem(&pool, request("C", open.competition_id))
            .await
            .unwrap();

        let all = ProblemService::list_problems(&pool, 0, 100, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let scoped = ProblemService::list_problems(&pool, 0, 100, Some(cup.competition_id))
            .await
            .unwrap();
        assert_eq!(scoped.len(), 2);
        assert!(scoped.iter().all(|p| p.competition_id == cup.competition_id));
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_unknown_competition_is_invalid_reference() {
        let pool = fresh_pool().await;

        let err = ProblemService::create_problem(&pool, request("A", 999))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }
}
