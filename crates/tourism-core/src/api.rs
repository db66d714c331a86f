//! Wire types for the tourism endpoint

use serde::{Deserialize, Serialize};

use crate::RequestError;

/// Fixed address of the tourism service.
pub const TOURISM_ENDPOINT: &str = "http://127.0.0.1:5000/tourism";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourismRequest {
    pub place: String,
}

impl TourismRequest {
    /// Builds the payload from raw input, trimming surrounding whitespace.
    pub fn new(place: &str) -> Self {
        Self {
            place: place.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourismResponse {
    pub answer: String,
}

impl TourismResponse {
    /// Parses a success body. Shared by the browser and native clients.
    pub fn from_body(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }
}
