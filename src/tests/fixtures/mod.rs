// Shared test fixtures for trackings.

use crate::modules::trackings::core::tracking::Tracking;
use crate::modules::trackings::use_cases::create_tracking::command::CreateTrackingBody;

pub fn make_tracking(tracking_id: &str, shipment_id: &str) -> Tracking {
    Tracking {
        tracking_id: tracking_id.to_string(),
        status: "in_transit".to_string(),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        location: "LAX".to_string(),
        shipment_id: shipment_id.to_string(),
        carrier_id: "C1".to_string(),
    }
}

/// Starts from a complete body; pass `None` to drop a field.
pub struct CreateTrackingBodyBuilder {
    inner: CreateTrackingBody,
}

impl Default for CreateTrackingBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTrackingBodyBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateTrackingBody {
                carrier_id: Some("C1".into()),
                location: Some("LAX".into()),
                shipment_id: Some("S1".into()),
                status: Some("in_transit".into()),
                timestamp: Some("2024-01-01T00:00:00Z".into()),
            },
        }
    }

    pub fn carrier_id(mut self, v: Option<&str>) -> Self {
        self.inner.carrier_id = v.map(String::from);
        self
    }

    pub fn location(mut self, v: Option<&str>) -> Self {
        self.inner.location = v.map(String::from);
        self
    }

    pub fn shipment_id(mut self, v: Option<&str>) -> Self {
        self.inner.shipment_id = v.map(String::from);
        self
    }

    pub fn status(mut self, v: Option<&str>) -> Self {
        self.inner.status = v.map(String::from);
        self
    }

    pub fn timestamp(mut self, v: Option<&str>) -> Self {
        self.inner.timestamp = v.map(String::from);
        self
    }

    pub fn build(self) -> CreateTrackingBody {
        self.inner
    }
}
