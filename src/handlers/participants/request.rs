//! Participant request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_NAME_LENGTH, handlers::nullable::present};

/// Create participant request; `user_id` must name an existing user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParticipantRequest {
    pub user_id: i32,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub institution: Option<String>,
}

/// Update participant request; `null` clears the institution
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateParticipantRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub institution: Option<Option<String>>,
}
