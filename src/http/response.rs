use serde_json::Value;

use crate::error::ProbeError;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub duration_ms: u128,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, ProbeError> {
        serde_json::from_str(&self.body).map_err(|source| ProbeError::Decode {
            what: "response body",
            source,
        })
    }
}
