//! Competition sponsorship link

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sponsor's monetary contribution to one competition.
///
/// At most one link exists per (competition, sponsor) pair.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CompetitionSponsor {
    pub link_id: i32,
    pub competition_id: i32,
    pub sponsor_user_id: i32,
    pub contribution: Decimal,
}
