use crate::core::alert_lead;
use chrono::NaiveDateTime;

/// Urgency tier of an order relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Due within the alert lead time, or already overdue.
    Urgent,
    /// Due later today.
    Today,
    /// Due on a later calendar day.
    Future,
}

impl Urgency {
    pub fn icon(&self) -> &'static str {
        match self {
            Urgency::Urgent => "🚨",
            Urgency::Today => "⏰",
            Urgency::Future => "📅",
        }
    }
}

/// The lead-time check runs first and includes negative diffs: an overdue
/// order is Urgent regardless of its calendar date.
pub fn classify(delivery_at: NaiveDateTime, now: NaiveDateTime) -> Urgency {
    if delivery_at - now <= alert_lead() {
        Urgency::Urgent
    } else if delivery_at.date() == now.date() {
        Urgency::Today
    } else {
        Urgency::Future
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_within_lead_time_is_urgent() {
        assert_eq!(classify(now() + Duration::hours(1), now()), Urgency::Urgent);
    }

    #[test]
    fn test_exactly_at_lead_time_is_urgent() {
        assert_eq!(classify(now() + Duration::hours(2), now()), Urgency::Urgent);
    }

    #[test]
    fn test_overdue_is_urgent() {
        assert_eq!(classify(now() - Duration::hours(5), now()), Urgency::Urgent);
    }

    #[test]
    fn test_overdue_on_earlier_day_is_urgent() {
        assert_eq!(classify(now() - Duration::days(3), now()), Urgency::Urgent);
    }

    #[test]
    fn test_same_day_outside_lead_time_is_today() {
        // Urgency window takes precedence, but 5h out is plain Today.
        assert_eq!(classify(now() + Duration::hours(5), now()), Urgency::Today);
    }

    #[test]
    fn test_later_day_is_future() {
        assert_eq!(classify(now() + Duration::days(3), now()), Urgency::Future);
    }

    #[test]
    fn test_tomorrow_within_lead_time_is_urgent() {
        // 23:30 today vs 00:30 tomorrow: different dates, diff within window.
        let late_now = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert_eq!(
            classify(late_now + Duration::hours(1), late_now),
            Urgency::Urgent
        );
    }

    #[test]
    fn test_icons() {
        assert_eq!(Urgency::Urgent.icon(), "🚨");
        assert_eq!(Urgency::Today.icon(), "⏰");
        assert_eq!(Urgency::Future.icon(), "📅");
    }
}
