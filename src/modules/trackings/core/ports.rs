// Ports the trackings use cases code against.
//
// Boundaries
// - No concrete storage here. The in memory adapter implements TrackingStore
//   in the adapters layer.

use crate::modules::trackings::core::tracking::Tracking;
use async_trait::async_trait;

pub const TRACKING_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Expiring store of tracking records keyed by `tracking_id`.
///
/// Entries expire a fixed time after insertion. Reads never refresh expiry and
/// never return expired entries, whether or not they were purged yet.
#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Inserts the record under its `tracking_id`, replacing any entry with the
    /// same key.
    async fn put(&self, tracking: Tracking) -> anyhow::Result<()>;

    async fn list_all(&self) -> anyhow::Result<Vec<Tracking>>;

    /// Full scan over [`TrackingStore::list_all`].
    async fn find_by_shipment(&self, shipment_id: &str) -> anyhow::Result<Vec<Tracking>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|tracking| tracking.shipment_id == shipment_id)
            .collect())
    }

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> anyhow::Result<usize>;
}
