use crate::core::alert_lead;
use crate::domain::model::ResolvedOrder;
use chrono::{Duration, NaiveDateTime};

/// Named views over the pending order set at one instant. `today`, `tomorrow`
/// and `week` partition pending by requested date; `near` cuts across them by
/// delivery timestamp.
#[derive(Debug)]
pub struct Windows<'a> {
    /// Orders whose delivery timestamp has not yet passed.
    pub pending: Vec<&'a ResolvedOrder>,
    pub today: Vec<&'a ResolvedOrder>,
    pub tomorrow: Vec<&'a ResolvedOrder>,
    /// Requested between the day after tomorrow and seven days out, inclusive.
    pub week: Vec<&'a ResolvedOrder>,
    /// Alertable set: due within the lead time. Overlaps `today`.
    pub near: Vec<&'a ResolvedOrder>,
}

pub fn split(orders: &[ResolvedOrder], now: NaiveDateTime) -> Windows<'_> {
    let today = now.date();
    let tomorrow = today + Duration::days(1);
    let end_7 = today + Duration::days(7);

    let pending: Vec<&ResolvedOrder> = orders.iter().filter(|o| o.delivery_at >= now).collect();

    Windows {
        today: pending
            .iter()
            .copied()
            .filter(|o| o.order.requested_date == today)
            .collect(),
        tomorrow: pending
            .iter()
            .copied()
            .filter(|o| o.order.requested_date == tomorrow)
            .collect(),
        week: pending
            .iter()
            .copied()
            .filter(|o| o.order.requested_date > tomorrow && o.order.requested_date <= end_7)
            .collect(),
        near: pending
            .iter()
            .copied()
            .filter(|o| o.delivery_at - now <= alert_lead())
            .collect(),
        pending,
    }
}
