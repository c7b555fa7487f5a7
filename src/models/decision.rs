use serde::Serialize;

use super::load::Load;

/// Outcome emitted for every first-seen load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadDecision {
    pub id: String,
    pub customer_id: String,
    pub accepted: bool,
}

impl LoadDecision {
    pub fn new(load: &Load, accepted: bool) -> Self {
        Self {
            id: load.id.clone(),
            customer_id: load.customer_id.clone(),
            accepted,
        }
    }

    /// Encode as a single output line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
