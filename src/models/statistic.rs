//! Competition statistics model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Aggregate figures for one competition (one row per competition)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Statistic {
    pub statistic_id: i32,
    pub average_time: Option<Decimal>,
    pub accuracy_rate: Option<Decimal>,
    pub hardest_problem: Option<String>,
    pub competition_id: i32,
}
