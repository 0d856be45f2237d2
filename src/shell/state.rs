use crate::modules::trackings::core::ports::TrackingStore;
use crate::modules::trackings::use_cases::create_tracking::handler::CreateTrackingHandler;
use crate::modules::trackings::use_cases::list_trackings_by_shipment::handler::ListTrackingsByShipmentHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_handler: Arc<CreateTrackingHandler<dyn TrackingStore>>,
    pub list_handler: Arc<ListTrackingsByShipmentHandler<dyn TrackingStore>>,
}

impl AppState {
    /// Both handlers share the one store instance.
    pub fn new(store: Arc<dyn TrackingStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateTrackingHandler::new(store.clone())),
            list_handler: Arc::new(ListTrackingsByShipmentHandler::new(store)),
        }
    }
}
