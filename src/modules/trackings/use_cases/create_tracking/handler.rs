use crate::modules::trackings::core::errors::ApplicationError;
use crate::modules::trackings::core::ports::TrackingStore;
use crate::modules::trackings::core::tracking::Tracking;
use crate::modules::trackings::use_cases::create_tracking::command::{
    CreateTracking, CreateTrackingBody,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateTrackingHandler<TStore>
where
    TStore: TrackingStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateTrackingHandler<TStore>
where
    TStore: TrackingStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates the body, stores a new tracking under a fresh id and returns it.
    /// Nothing is stored when validation fails.
    pub async fn handle(&self, body: CreateTrackingBody) -> Result<Tracking, ApplicationError> {
        let command = CreateTracking::try_from(body)?;

        let tracking = Tracking {
            tracking_id: Uuid::now_v7().to_string(),
            status: command.status,
            timestamp: command.timestamp,
            location: command.location,
            shipment_id: command.shipment_id,
            carrier_id: command.carrier_id,
        };

        self.store.put(tracking.clone()).await?;
        tracing::info!(
            tracking_id = %tracking.tracking_id,
            shipment_id = %tracking.shipment_id,
            "tracking created"
        );
        Ok(tracking)
    }
}
