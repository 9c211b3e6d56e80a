use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A raw order row from the feed, after date coercion. Rows whose requested
/// date could not be parsed never become an `Order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// SO number from the feed. Opaque, not guaranteed unique.
    pub so_number: String,
    pub product: Option<String>,
    pub customer: Option<String>,
    pub requested_date: NaiveDate,
    /// Free-text remarks, possibly carrying a delivery time.
    pub remarks: Option<String>,
}

/// An order with its best-effort delivery timestamp attached. Every `Order`
/// produces exactly one of these; a missing or unparseable time falls back to
/// the 23:59 sentinel instead of dropping the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOrder {
    pub order: Order,
    pub delivery_time: NaiveTime,
    pub delivery_at: NaiveDateTime,
}

impl ResolvedOrder {
    /// Case-insensitive substring match over SO number, customer and product.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let contains = |field: Option<&str>| {
            field
                .map(|s| s.to_lowercase().contains(&query))
                .unwrap_or(false)
        };
        self.order.so_number.to_lowercase().contains(&query)
            || contains(self.order.customer.as_deref())
            || contains(self.order.product.as_deref())
    }
}
