//! Competition-sponsor request DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_amount;

/// Link a sponsor to a competition
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionSponsorRequest {
    pub competition_id: i32,

    pub sponsor_user_id: i32,

    #[validate(custom(function = "validate_amount"))]
    pub contribution: Decimal,
}

/// Update a sponsorship link
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCompetitionSponsorRequest {
    pub competition_id: Option<i32>,

    pub sponsor_user_id: Option<i32>,

    #[validate(custom(function = "validate_amount"))]
    pub contribution: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_from_json_number() {
        let request: CreateCompetitionSponsorRequest = serde_json::from_value(serde_json::json!({
            "competition_id": 1,
            "sponsor_user_id": 2,
            "contribution": 1500.5
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.contribution, Decimal::new(15005, 1));
    }

    #[test]
    fn test_negative_contribution_rejected() {
        let request = CreateCompetitionSponsorRequest {
            competition_id: 1,
            sponsor_user_id: 2,
            contribution: Decimal::new(-1, 0),
        };
        assert!(request.validate().is_err());

        let update = UpdateCompetitionSponsorRequest {
            contribution: Some(Decimal::new(-250, 2)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_contribution_must_fit_column() {
        let request = CreateCompetitionSponsorRequest {
            competition_id: 1,
            sponsor_user_id: 2,
            contribution: Decimal::new(1_000_000_000, 0),
        };
        assert!(request.validate().is_err());

        let largest = CreateCompetitionSponsorRequest {
            contribution: Decimal::new(9_999_999_999, 2),
            ..request
        };
        assert!(largest.validate().is_ok());
    }
}
