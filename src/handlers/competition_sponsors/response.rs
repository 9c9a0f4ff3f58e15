//! Competition-sponsor response DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CompetitionSponsor;

#[derive(Debug, Serialize)]
pub struct CompetitionSponsorResponse {
    pub link_id: i32,
    pub competition_id: i32,
    pub sponsor_user_id: i32,
    pub contribution: Decimal,
}

impl From<CompetitionSponsor> for CompetitionSponsorResponse {
    fn from(link: CompetitionSponsor) -> Self {
        Self {
            link_id: link.link_id,
            competition_id: link.competition_id,
            sponsor_user_id: link.sponsor_user_id,
            contribution: link.contribution,
        }
    }
}
