// In memory implementation of the TrackingStore port.
//
// Responsibilities
// - Store tracking rows in a map keyed by tracking_id, each with its own expiry.
// - Hide expired rows from reads even before the sweeper purges them.

use crate::modules::trackings::core::ports::{TRACKING_TTL_MS, TrackingStore};
use crate::modules::trackings::core::tracking::Tracking;
use crate::shared::core::clock::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredTracking {
    tracking: Tracking,
    expires_at: i64,
}

impl StoredTracking {
    fn is_live(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

pub struct InMemoryTrackingStore {
    rows: RwLock<HashMap<String, StoredTracking>>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
    is_offline: bool,
}

impl InMemoryTrackingStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            clock,
            ttl_ms: TRACKING_TTL_MS,
            is_offline: false,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Tracking store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TrackingStore for InMemoryTrackingStore {
    async fn put(&self, tracking: Tracking) -> anyhow::Result<()> {
        self.ensure_online()?;

        let expires_at = self.clock.now_millis().saturating_add(self.ttl_ms);
        let mut guard = self.rows.write().await;
        guard.insert(
            tracking.tracking_id.clone(),
            StoredTracking {
                tracking,
                expires_at,
            },
        );
        Ok(())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Tracking>> {
        self.ensure_online()?;

        let now = self.clock.now_millis();
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .filter(|row| row.is_live(now))
            .map(|row| row.tracking.clone())
            .collect())
    }

    async fn purge_expired(&self) -> anyhow::Result<usize> {
        self.ensure_online()?;

        let now = self.clock.now_millis();
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|_, row| row.is_live(now));
        Ok(before - guard.len())
    }
}
