use crate::domain::model::Order;
use crate::domain::ports::OrderSource;
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

/// Day-first formats the feed is known to use, ISO as a last resort.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%y", "%Y-%m-%d"];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "SO Number", default)]
    so_number: Option<String>,
    #[serde(rename = "Product", default)]
    product: Option<String>,
    #[serde(rename = "Customers", default)]
    customer: Option<String>,
    #[serde(rename = "Requested Delivery Date", default)]
    requested_date: Option<String>,
    #[serde(rename = "Order Remarks", default)]
    remarks: Option<String>,
}

/// Pulls order rows from a CSV export URL. Rows whose requested date cannot
/// be coerced are dropped here, before the core sees them.
pub struct CsvFeed {
    client: Client,
    url: String,
}

impl CsvFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    fn parse_rows(&self, body: &str) -> Vec<Order> {
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let mut orders = Vec::new();
        let mut dropped = 0usize;

        for row in reader.deserialize::<RawRow>() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!("Skipping malformed feed row: {}", e);
                    continue;
                }
            };

            let Some(date) = row.requested_date.as_deref().and_then(parse_day_first) else {
                dropped += 1;
                tracing::debug!(
                    "Dropping row {:?}: unparseable requested date {:?}",
                    row.so_number,
                    row.requested_date
                );
                continue;
            };

            orders.push(Order {
                so_number: row.so_number.unwrap_or_default(),
                product: row.product.filter(|s| !s.trim().is_empty()),
                customer: row.customer.filter(|s| !s.trim().is_empty()),
                requested_date: date,
                remarks: row.remarks.filter(|s| !s.is_empty()),
            });
        }

        if dropped > 0 {
            tracing::info!("Dropped {} rows with unparseable dates", dropped);
        }
        orders
    }
}

fn parse_day_first(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[async_trait]
impl OrderSource for CsvFeed {
    async fn fetch(&self) -> Result<Vec<Order>> {
        tracing::debug!("Fetching order feed from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Feed response status: {}", status);
        if !status.is_success() {
            return Err(DashboardError::FeedStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(self.parse_rows(&body))
    }
}
