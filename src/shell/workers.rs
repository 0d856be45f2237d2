// Background workers spawned by the composition root.

use crate::modules::trackings::core::ports::TrackingStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const EXPIRY_SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Purges expired trackings every `every`. Reads already skip expired entries,
/// so this only reclaims memory.
pub fn spawn_expiry_sweeper<TStore>(store: Arc<TStore>, every: Duration) -> JoinHandle<()>
where
    TStore: TrackingStore + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!(purged, "purged expired trackings"),
                Err(error) => tracing::warn!(error = ?error, "expiry sweep failed"),
            }
        }
    })
}
