//! Sponsor request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create sponsor request; the logo is uploaded separately
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSponsorRequest {
    pub user_id: i32,
}
