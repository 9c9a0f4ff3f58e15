//! Sponsor model

use serde::Serialize;
use sqlx::FromRow;

/// Sponsor role extension of a user
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sponsor {
    pub user_id: i32,
    #[serde(skip_serializing)]
    pub logo: Option<Vec<u8>>,
}
