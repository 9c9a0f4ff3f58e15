//! Competition request DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH},
    handlers::nullable::present,
};

/// Create competition request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub location: Option<String>,

    pub date: NaiveDate,

    /// Organizing team
    pub team_id: i32,

    pub start_time: Option<NaiveTime>,

    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,
}

/// Update competition request.
///
/// Optional columns accept `null` to clear them; `max_participants: null`
/// removes the capacity limit.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub location: Option<Option<String>>,

    pub date: Option<NaiveDate>,

    pub team_id: Option<i32>,

    #[serde(default, deserialize_with = "present")]
    pub start_time: Option<Option<NaiveTime>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(range(min = 1))]
    pub max_participants: Option<Option<i32>>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<Option<String>>,
}
