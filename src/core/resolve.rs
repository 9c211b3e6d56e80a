use crate::core::time_extract::{self, SENTINEL_CLOCK};
use crate::domain::model::{Order, ResolvedOrder};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Strict `HH:MM` parse with sentinel fallback. Out-of-range values produced
/// by the extractor (e.g. "25:00") land here and become 23:59.
pub fn parse_clock(clock: &str) -> NaiveTime {
    NaiveTime::parse_from_str(clock, "%H:%M").unwrap_or_else(|_| sentinel_time())
}

/// The requested date at the given clock time, same calendar day. Naive/local
/// throughout; no timezone conversion.
pub fn resolve_timestamp(date: NaiveDate, clock: &str) -> NaiveDateTime {
    date.and_time(parse_clock(clock))
}

/// Attaches a delivery timestamp to an order. Never fails: an order with a
/// valid requested date always resolves, whatever its remarks say.
pub fn resolve_order(order: Order) -> ResolvedOrder {
    let clock = time_extract::extract(order.remarks.as_deref());
    let delivery_time = parse_clock(&clock);
    ResolvedOrder {
        delivery_at: order.requested_date.and_time(delivery_time),
        delivery_time,
        order,
    }
}

fn sentinel_time() -> NaiveTime {
    NaiveTime::parse_from_str(SENTINEL_CLOCK, "%H:%M")
        .unwrap_or_else(|_| NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_resolve_valid_clock() {
        let ts = resolve_timestamp(date(), "14:30");
        assert_eq!(ts, date().and_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_out_of_range_falls_back_to_sentinel() {
        let ts = resolve_timestamp(date(), "25:00");
        assert_eq!(ts, date().and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_resolve_garbage_falls_back_to_sentinel() {
        let ts = resolve_timestamp(date(), "not a time");
        assert_eq!(ts, date().and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_resolve_order_with_remarks_time() {
        let order = Order {
            so_number: "SO-1".to_string(),
            product: None,
            customer: None,
            requested_date: date(),
            remarks: Some("ส่งของ 15:45".to_string()),
        };
        let resolved = resolve_order(order);
        assert_eq!(resolved.delivery_time, NaiveTime::from_hms_opt(15, 45, 0).unwrap());
        assert_eq!(resolved.delivery_at, date().and_hms_opt(15, 45, 0).unwrap());
    }

    #[test]
    fn test_resolve_order_without_remarks_uses_sentinel() {
        let order = Order {
            so_number: "SO-2".to_string(),
            product: None,
            customer: None,
            requested_date: date(),
            remarks: None,
        };
        let resolved = resolve_order(order);
        assert_eq!(resolved.delivery_at, date().and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn test_resolve_order_afternoon_overflow_absorbed() {
        let order = Order {
            so_number: "SO-3".to_string(),
            product: None,
            customer: None,
            requested_date: date(),
            remarks: Some("บ่าย 13".to_string()),
        };
        // 25:00 from the extractor fails the strict parse and becomes 23:59.
        let resolved = resolve_order(order);
        assert_eq!(resolved.delivery_at, date().and_hms_opt(23, 59, 0).unwrap());
    }
}
