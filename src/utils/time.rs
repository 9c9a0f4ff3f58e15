//! Time utilities

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current calendar date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_matches_local_clock() {
        let before = Local::now().date_naive();
        let day = today();
        let after = Local::now().date_naive();
        assert!(day >= before && day <= after);
    }

    #[test]
    fn test_now_utc_is_monotonic_enough() {
        let first = now_utc();
        let second = now_utc();
        assert!(second >= first);
    }
}
