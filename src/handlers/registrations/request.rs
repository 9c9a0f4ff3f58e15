//! Registration request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_CATEGORY_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH},
    error::AppResult,
    handlers::nullable::present,
    utils::MultipartForm,
};

/// Register an existing participant for a competition
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRegistrationRequest {
    pub participant_user_id: i32,

    pub competition_id: i32,

    #[validate(length(max = MAX_CATEGORY_LENGTH))]
    pub category: Option<String>,
}

/// Update registration request; `category: null` clears the category
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRegistrationRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = MAX_CATEGORY_LENGTH))]
    pub category: Option<Option<String>>,

    pub participant_user_id: Option<i32>,

    pub competition_id: Option<i32>,
}

/// Public sign-up form: creates the user, the participant record and the
/// registration at once
#[derive(Debug, Validate)]
pub struct SelfRegistrationForm {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email, length(max = MAX_NAME_LENGTH))]
    pub email: String,

    /// Stored as the participant's institution
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub university: Option<String>,

    #[validate(length(max = MAX_CATEGORY_LENGTH))]
    pub category: Option<String>,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: Option<String>,

    pub photo: Option<Vec<u8>>,
}

impl SelfRegistrationForm {
    /// Pick the known fields out of a multipart body; anything else is ignored
    pub fn from_multipart(mut form: MultipartForm) -> AppResult<Self> {
        Ok(Self {
            name: form.required_text("name")?.to_string(),
            email: form.required_text("email")?.to_string(),
            university: form.text("university").map(str::to_string),
            category: form.text("category").map(str::to_string),
            password: form.text("password").map(str::to_string),
            photo: form.take_file("photo"),
        })
    }
}
