// Response records, one per endpoint

use serde::{Serialize, Serializer};

use backend_domain::{EventSummary, LevelCounts, LocationCount, RareSignalEvent, StatusCounts, UltraRareEvent};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub system: String,
    pub stats: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct RareSignalResponse {
    pub total: usize,
    pub classification: &'static str,
    pub score: f64,
    pub events: Vec<RareSignalEvent>,
}

#[derive(Debug, Serialize)]
pub struct UltraRareResponse {
    pub total: usize,
    pub classification: &'static str,
    pub score_threshold: f64,
    pub events: Vec<UltraRareEvent>,
}

#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub total: usize,
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub levels: LevelCounts,
    pub top_locations: Vec<LocationCount>,
    pub average_score: AverageScore,
}

/// Mean score rounded to two decimals; an empty table renders as integer `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageScore(pub Option<f64>);

impl Serialize for AverageScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_u8(0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
