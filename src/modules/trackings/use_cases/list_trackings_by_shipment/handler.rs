use crate::modules::trackings::core::errors::{ApplicationError, ValidationError};
use crate::modules::trackings::core::ports::TrackingStore;
use crate::modules::trackings::core::tracking::Tracking;
use std::sync::Arc;

pub struct ListTrackingsByShipmentHandler<TStore>
where
    TStore: TrackingStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListTrackingsByShipmentHandler<TStore>
where
    TStore: TrackingStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, shipment_id: &str) -> Result<Vec<Tracking>, ApplicationError> {
        if shipment_id.is_empty() {
            return Err(ValidationError::MissingShipmentId.into());
        }

        Ok(self.store.find_by_shipment(shipment_id).await?)
    }
}
