use serde::{Deserialize, Serialize};

/// One shipment status event. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    pub tracking_id: String,
    pub status: String,
    pub timestamp: String,
    pub location: String,
    pub shipment_id: String,
    pub carrier_id: String,
}
