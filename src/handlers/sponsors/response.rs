//! Sponsor response DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::handlers::users::response::UserResponse;

/// Sponsor with its sponsorship totals
#[derive(Debug, Serialize)]
pub struct SponsorResponse {
    pub user_id: i32,
    /// Base64-encoded logo
    pub logo: Option<String>,
    pub competition_count: i64,
    pub total_contribution: Decimal,
    pub user: Option<UserResponse>,
}
