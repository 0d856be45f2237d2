use crate::modules::trackings::core::errors::ValidationError;
use serde_json::Value;

/// Transport shape of a create request. Every field may be absent until
/// validated.
#[derive(Debug, Clone, Default)]
pub struct CreateTrackingBody {
    pub carrier_id: Option<String>,
    pub location: Option<String>,
    pub shipment_id: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<String>,
}

impl CreateTrackingBody {
    /// Parses a raw request body. An empty body reads as `{}`, `null` reads as
    /// an absent field, and unknown keys are ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let Value::Object(mut object) =
            serde_json::from_slice::<Value>(bytes).map_err(|_| ValidationError::InvalidBody)?
        else {
            return Err(ValidationError::InvalidBody);
        };

        let mut non_strings = Vec::new();
        let mut take = |name: &'static str| match object.remove(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value),
            Some(_) => {
                non_strings.push(name);
                None
            }
        };
        let body = Self {
            carrier_id: take("carrier_id"),
            location: take("location"),
            shipment_id: take("shipment_id"),
            status: take("status"),
            timestamp: take("timestamp"),
        };

        if !non_strings.is_empty() {
            return Err(ValidationError::NonStringFields(non_strings));
        }
        Ok(body)
    }
}

/// A create request with every required field present and non empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTracking {
    pub carrier_id: String,
    pub location: String,
    pub shipment_id: String,
    pub status: String,
    pub timestamp: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<CreateTrackingBody> for CreateTracking {
    type Error = ValidationError;

    fn try_from(body: CreateTrackingBody) -> Result<Self, Self::Error> {
        let fields = [
            ("carrier_id", present(body.carrier_id)),
            ("location", present(body.location)),
            ("shipment_id", present(body.shipment_id)),
            ("status", present(body.status)),
            ("timestamp", present(body.timestamp)),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let [carrier_id, location, shipment_id, status, timestamp] =
            fields.map(|(_, value)| value.unwrap_or_default());
        Ok(Self {
            carrier_id,
            location,
            shipment_id,
            status,
            timestamp,
        })
    }
}
