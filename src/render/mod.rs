use crate::core::classify::classify;
use crate::core::windows::Windows;
use crate::domain::model::ResolvedOrder;
use chrono::NaiveDateTime;

const UNSPECIFIED: &str = "unspecified";

pub fn summary(windows: &Windows<'_>) -> String {
    format!(
        "📦 Due today: {}   🚨 Near (≤2h): {}   📊 Pending: {}",
        windows.today.len(),
        windows.near.len(),
        windows.pending.len()
    )
}

/// Shown with every render so the sentinel is never mistaken for a deadline.
pub fn sentinel_note() -> &'static str {
    "ℹ️  Orders showing 23:59 have no delivery time specified in the source document."
}

/// Card view, one block per order, sorted by delivery timestamp.
pub fn render_cards(orders: &[&ResolvedOrder], now: NaiveDateTime) -> String {
    let mut sorted: Vec<&ResolvedOrder> = orders.to_vec();
    sorted.sort_by_key(|o| o.delivery_at);

    let mut out = String::new();
    for order in sorted {
        let icon = classify(order.delivery_at, now).icon();
        out.push_str(&format!(
            "{} 📄 {}\n   🧾 {}\n   👤 Customer: {}\n   ⏰ Delivery: {}\n\n",
            icon,
            order.order.so_number,
            order.order.product.as_deref().unwrap_or(UNSPECIFIED),
            order.order.customer.as_deref().unwrap_or(UNSPECIFIED),
            order.delivery_time.format("%H:%M"),
        ));
    }
    out
}

/// Table view for quick scanning, sorted by requested date.
pub fn render_table(orders: &[&ResolvedOrder]) -> String {
    let mut sorted: Vec<&ResolvedOrder> = orders.to_vec();
    sorted.sort_by_key(|o| o.order.requested_date);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<14} {:<24} {:<20} {:<12} {:<6}\n",
        "SO Number", "Product", "Customer", "Date", "Time"
    ));
    for order in sorted {
        out.push_str(&format!(
            "{:<14} {:<24} {:<20} {:<12} {:<6}\n",
            order.order.so_number,
            order.order.product.as_deref().unwrap_or(UNSPECIFIED),
            order.order.customer.as_deref().unwrap_or(UNSPECIFIED),
            order.order.requested_date.format("%d/%m/%Y"),
            order.delivery_time.format("%H:%M"),
        ));
    }
    out
}

/// Transient banner; re-fires on every render while the near set is
/// non-empty. No acknowledgment state.
pub fn alert_banner(near_count: usize) -> Option<String> {
    if near_count == 0 {
        return None;
    }
    Some(format!(
        "🚨 {} order(s) near delivery time (≤2h)!",
        near_count
    ))
}
