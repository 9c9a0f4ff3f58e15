//! Statistic service

use sqlx::PgPool;

use crate::{
    db::repositories::StatisticRepository,
    error::{AppError, AppResult},
    handlers::statistics::{
        request::{CreateStatisticRequest, UpdateStatisticRequest},
        response::StatisticResponse,
    },
};

pub struct StatisticService;

impl StatisticService {
    pub async fn list_statistics(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<StatisticResponse>> {
        let statistics = StatisticRepository::list(pool, offset, limit).await?;
        Ok(statistics.into_iter().map(Into::into).collect())
    }

    /// One row per competition; a second one is rejected by the unique constraint
    pub async fn create_statistic(
        pool: &PgPool,
        payload: CreateStatisticRequest,
    ) -> AppResult<StatisticResponse> {
        let statistic = StatisticRepository::create(
            pool,
            payload.average_time,
            payload.accuracy_rate,
            payload.hardest_problem.as_deref(),
            payload.competition_id,
        )
        .await?;

        Ok(statistic.into())
    }

    pub async fn get_statistic(pool: &PgPool, id: i32) -> AppResult<StatisticResponse> {
        StatisticRepository::find_by_id(pool, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Statistic not found".to_string()))
    }

    pub async fn update_statistic(
        pool: &PgPool,
        id: i32,
        payload: UpdateStatisticRequest,
    ) -> AppResult<StatisticResponse> {
        StatisticRepository::update(
            pool,
            id,
            payload.average_time,
            payload.accuracy_rate,
            payload.hardest_problem.as_ref().map(|h| h.as_deref()),
            payload.competition_id,
        )
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("Statistic not found".to_string()))
    }

    pub async fn delete_statistic(pool: &PgPool, id: i32) -> AppResult<()> {
        if !StatisticRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Statistic not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        test_utils::{fixtures, test_app::fresh_pool},
        utils::today,
    };

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_one_statistic_per_competition() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let cup = fixtures::competition(&pool, team.team_id, today(), None).await;

        let request = || CreateStatisticRequest {
            average_time: Some(Decimal::new(425, 1)),
            accuracy_rate: Some(Decimal::new(8750, 2)),
            hardest_problem: Some("Problem F".to_string()),
            competition_id: cup.competition_id,
        };

        let created = StatisticService::create_statistic(&pool, request()).await.unwrap();
        assert_eq!(created.accuracy_rate, Some(Decimal::new(8750, 2)));

        let err = StatisticService::create_statistic(&pool, request()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::AlreadyExists(ref m) if m == "Competition already has statistics"
        ));

        let updated = StatisticService::update_statistic(
            &pool,
            created.statistic_id,
            UpdateStatisticRequest {
                hardest_problem: Some(Some("Problem C".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.hardest_problem.as_deref(), Some("Problem C"));
        assert_eq!(updated.average_time, Some(Decimal::new(425, 1)));

        let cleared = StatisticService::update_statistic(
            &pool,
            created.statistic_id,
            UpdateStatisticRequest {
                average_time: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(cleared.average_time, None);
        assert_eq!(cleared.accuracy_rate, Some(Decimal::new(8750, 2)));
    }
}
