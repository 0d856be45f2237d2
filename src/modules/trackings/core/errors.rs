use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Fields must be strings: {}", .0.join(", "))]
    NonStringFields(Vec<&'static str>),

    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Shipment ID is required")]
    MissingShipmentId,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
