//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_LINK_LENGTH, MAX_NAME_LENGTH},
    handlers::pagination::page_window,
    models::Difficulty,
};

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: String,

    pub difficulty: Difficulty,

    /// External statement URL
    #[validate(url, length(max = MAX_LINK_LENGTH))]
    pub link: String,

    pub competition_id: i32,
}

/// Update problem request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: Option<String>,

    pub difficulty: Option<Difficulty>,

    #[validate(url, length(max = MAX_LINK_LENGTH))]
    pub link: Option<String>,

    pub competition_id: Option<i32>,
}

/// Query parameters for listing problems
#[derive(Debug, Default, Deserialize)]
pub struct ListProblemsQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub competition_id: Option<i32>,
}

impl ListProblemsQuery {
    pub fn window(&self) -> (i64, i64) {
        page_window(self.offset, self.limit)
    }
}
