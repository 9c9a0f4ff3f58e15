//! Statistic response DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Statistic;

#[derive(Debug, Serialize)]
pub struct StatisticResponse {
    pub statistic_id: i32,
    pub average_time: Option<Decimal>,
    pub accuracy_rate: Option<Decimal>,
    pub hardest_problem: Option<String>,
    pub competition_id: i32,
}

impl From<Statistic> for StatisticResponse {
    fn from(statistic: Statistic) -> Self {
        Self {
            statistic_id: statistic.statistic_id,
            average_time: statistic.average_time,
            accuracy_rate: statistic.accuracy_rate,
            hardest_problem: statistic.hardest_problem,
            competition_id: statistic.competition_id,
        }
    }
}
