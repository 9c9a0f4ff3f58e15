//! Statistic request DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_NAME_LENGTH,
    handlers::nullable::present,
    utils::validation::{validate_amount, validate_percentage},
};

/// Create the statistics row of a competition
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatisticRequest {
    /// Average solve time
    #[validate(custom(function = "validate_amount"))]
    pub average_time: Option<Decimal>,

    /// Percentage of accepted submissions, 0 to 100
    #[validate(custom(function = "validate_percentage"))]
    pub accuracy_rate: Option<Decimal>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub hardest_problem: Option<String>,

    pub competition_id: i32,
}

/// Update statistic request; `null` clears a figure
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateStatisticRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_amount"))]
    pub average_time: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_percentage"))]
    pub accuracy_rate: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub hardest_problem: Option<Option<String>>,

    pub competition_id: Option<i32>,
}
