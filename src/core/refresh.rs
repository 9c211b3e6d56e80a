use crate::core::{resolve::resolve_order, REFRESH_TTL_SECS};
use crate::domain::model::ResolvedOrder;
use crate::domain::ports::OrderSource;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

struct CachedSet {
    fetched_at: Instant,
    orders: Vec<ResolvedOrder>,
}

/// Owns the feed and a single cache slot. Calls within the TTL return the
/// previously resolved set without touching the source; each refresh is an
/// independent fetch-and-resolve with no state carried across.
pub struct RefreshManager<S: OrderSource> {
    source: S,
    ttl: Duration,
    cached: Option<CachedSet>,
}

impl<S: OrderSource> RefreshManager<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, Duration::from_secs(REFRESH_TTL_SECS))
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            cached: None,
        }
    }

    pub async fn orders(&mut self) -> Result<&[ResolvedOrder]> {
        let fresh = self
            .cached
            .as_ref()
            .is_some_and(|c| c.fetched_at.elapsed() < self.ttl);

        if !fresh {
            tracing::debug!("Cache stale, fetching order feed");
            let raw = self.source.fetch().await?;
            let orders: Vec<ResolvedOrder> = raw.into_iter().map(resolve_order).collect();
            tracing::info!("Resolved {} orders from feed", orders.len());
            self.cached = Some(CachedSet {
                fetched_at: Instant::now(),
                orders,
            });
        }

        Ok(self
            .cached
            .as_ref()
            .map(|c| c.orders.as_slice())
            .unwrap_or(&[]))
    }
}
