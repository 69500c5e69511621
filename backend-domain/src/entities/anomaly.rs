// Anomaly entity
// One detected event as read from the `anomalies` table

use serde::Serialize;

use crate::utils::NestedFields;

/// Identity, location and score projection shared by every listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub id: i64,
    pub timestamp_utc: String,
    pub geo_tag: Option<String>,
    pub anomaly_score: f64,
    pub anomaly_level: Option<i64>,
    pub packet_size: Option<i64>,
}

/// Full row including the raw serialized nested columns, kept as the stored
/// bytes whether the column held TEXT or a BLOB.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRow {
    pub summary: EventSummary,
    pub protocol_info: Option<Vec<u8>>,
    pub structural_analysis: Option<Vec<u8>>,
    pub pattern_analysis: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RareSignalEvent {
    #[serde(flatten)]
    pub summary: EventSummary,
    pub protocol_info: NestedFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UltraRareEvent {
    #[serde(flatten)]
    pub summary: EventSummary,
    pub protocol_info: NestedFields,
    pub structural_analysis: NestedFields,
    pub pattern_analysis: NestedFields,
}

impl From<AnomalyRow> for RareSignalEvent {
    fn from(row: AnomalyRow) -> Self {
        Self {
            protocol_info: crate::utils::decode_nested(row.protocol_info.as_deref()),
            summary: row.summary,
        }
    }
}

impl From<AnomalyRow> for UltraRareEvent {
    fn from(row: AnomalyRow) -> Self {
        Self {
            protocol_info: crate::utils::decode_nested(row.protocol_info.as_deref()),
            structural_analysis: crate::utils::decode_nested(row.structural_analysis.as_deref()),
            pattern_analysis: crate::utils::decode_nested(row.pattern_analysis.as_deref()),
            summary: row.summary,
        }
    }
}
