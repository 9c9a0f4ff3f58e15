//! Competition model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::time::today;

/// Competition database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub competition_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub date: NaiveDate,
    /// Organizing team
    pub team_id: i32,
    pub start_time: Option<NaiveTime>,
    pub max_participants: Option<i32>,
    pub description: Option<String>,
}

impl Competition {
    /// Get current status of the competition
    pub fn status(&self) -> CompetitionStatus {
        self.status_on(today())
    }

    /// Status relative to a given calendar day; time of day plays no part
    pub fn status_on(&self, day: NaiveDate) -> CompetitionStatus {
        if self.date > day {
            CompetitionStatus::Upcoming
        } else if self.date == day {
            CompetitionStatus::Today
        } else {
            CompetitionStatus::Finished
        }
    }

    /// Check whether `registration_count` already fills the capacity
    pub fn is_full(&self, registration_count: i64) -> bool {
        self.max_participants
            .is_some_and(|max| registration_count >= i64::from(max))
    }
}

/// Competition status label derived from its date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionStatus {
    Upcoming,
    Today,
    Finished,
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Today => write!(f, "Today"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn competition_on(date: NaiveDate) -> Competition {
        Competition {
            competition_id: 1,
            name: "Cup".to_string(),
            location: None,
            date,
            team_id: 1,
            start_time: None,
            max_participants: None,
            description: None,
        }
    }

    #[test]
    fn test_status_relative_to_day() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();

        assert_eq!(
            competition_on(day + Duration::days(1)).status_on(day),
            CompetitionStatus::Upcoming
        );
        assert_eq!(competition_on(day).status_on(day), CompetitionStatus::Today);
        assert_eq!(
            competition_on(day - Duration::days(1)).status_on(day),
            CompetitionStatus::Finished
        );
    }

    #[test]
    fn test_status_ignores_start_time() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 25).unwrap();
        let mut competition = competition_on(day);
        competition.start_time = NaiveTime::from_hms_opt(0, 0, 1);
        assert_eq!(competition.status_on(day), CompetitionStatus::Today);
        competition.start_time = NaiveTime::from_hms_opt(23, 59, 59);
        assert_eq!(competition.status_on(day), CompetitionStatus::Today);
    }

    #[test]
    fn test_status_against_system_date() {
        let competition = competition_on(today());
        assert_eq!(competition.status(), CompetitionStatus::Today);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CompetitionStatus::Upcoming.to_string(), "Upcoming");
        assert_eq!(CompetitionStatus::Today.to_string(), "Today");
        assert_eq!(CompetitionStatus::Finished.to_string(), "Finished");
        assert_eq!(
            serde_json::to_string(&CompetitionStatus::Finished).unwrap(),
            "\"Finished\""
        );
    }

    #[test]
    fn test_is_full() {
        let mut competition = competition_on(today());
        assert!(!competition.is_full(1_000));

        competition.max_participants = Some(2);
        assert!(!competition.is_full(1));
        assert!(competition.is_full(2));
    }
}
