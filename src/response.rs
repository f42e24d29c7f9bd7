use serde::Serialize;
use utoipa::ToSchema;

/// Bare `{message}` body used by the liveness route and the consumption
/// acknowledgement, matching the frontend contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
