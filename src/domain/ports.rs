use crate::domain::model::Order;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies raw order rows. Implemented by the CSV feed in production and by
/// in-memory mocks in tests.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Order>>;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn filter(&self) -> Option<&str>;
}
