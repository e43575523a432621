//! Expiry classification of a batch.
//!
//! Derived from the wall clock on every call; nothing here is cached, so the
//! same batch can change class between two renders.

use crate::shared::dates::DAY_MS;
use chrono::{DateTime, Utc};

/// Batches expiring within this many days are flagged
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchStatus {
    Expired,
    /// `days` is the ceiling of the remaining time in days
    ExpiringSoon { days: i64 },
    Active,
}

impl BatchStatus {
    pub fn compute(expiry: DateTime<Utc>, is_expired: bool, now: DateTime<Utc>) -> Self {
        if is_expired || expiry <= now {
            return BatchStatus::Expired;
        }
        let remaining_ms = (expiry - now).num_milliseconds();
        let days = (remaining_ms + DAY_MS - 1) / DAY_MS;
        if days <= EXPIRY_WARNING_DAYS {
            BatchStatus::ExpiringSoon { days }
        } else {
            BatchStatus::Active
        }
    }

    pub fn label(&self) -> String {
        match self {
            BatchStatus::Expired => "Expired".to_string(),
            BatchStatus::ExpiringSoon { days } => format!("Expiring in {} days", days),
            BatchStatus::Active => "Active".to_string(),
        }
    }

    /// Badge variant name understood by the UI badge component
    pub fn badge_variant(&self) -> &'static str {
        match self {
            BatchStatus::Expired => "error",
            BatchStatus::ExpiringSoon { .. } => "warning",
            BatchStatus::Active => "success",
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, BatchStatus::Expired)
    }

    pub fn is_expiring_soon(&self) -> bool {
        matches!(self, BatchStatus::ExpiringSoon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_flag_wins_over_dates() {
        let far = now() + Duration::days(400);
        assert_eq!(BatchStatus::compute(far, true, now()), BatchStatus::Expired);
    }

    #[test]
    fn test_expiry_at_or_before_now_is_expired() {
        assert_eq!(BatchStatus::compute(now(), false, now()), BatchStatus::Expired);
        let past = now() - Duration::minutes(1);
        assert_eq!(BatchStatus::compute(past, false, now()).label(), "Expired");
    }

    #[test]
    fn test_days_are_rounded_up() {
        let one_ms = now() + Duration::milliseconds(1);
        assert_eq!(
            BatchStatus::compute(one_ms, false, now()),
            BatchStatus::ExpiringSoon { days: 1 }
        );
        let just_over_two = now() + Duration::days(2) + Duration::hours(1);
        assert_eq!(
            BatchStatus::compute(just_over_two, false, now()).label(),
            "Expiring in 3 days"
        );
    }

    #[test]
    fn test_thirty_day_boundary() {
        let exactly_30 = now() + Duration::days(30);
        assert_eq!(
            BatchStatus::compute(exactly_30, false, now()),
            BatchStatus::ExpiringSoon { days: 30 }
        );
        let past_30 = exactly_30 + Duration::seconds(1);
        assert_eq!(BatchStatus::compute(past_30, false, now()), BatchStatus::Active);
        assert_eq!(BatchStatus::Active.label(), "Active");
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(BatchStatus::Expired.badge_variant(), "error");
        assert_eq!(BatchStatus::ExpiringSoon { days: 3 }.badge_variant(), "warning");
        assert_eq!(BatchStatus::Active.badge_variant(), "success");
    }
}
