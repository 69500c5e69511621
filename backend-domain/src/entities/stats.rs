// Aggregated statistics over the anomalies table

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total_anomalies: u64,
    pub level3_events: u64,
    pub ultra_rare_events: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCount {
    /// `None` groups rows whose level is NULL.
    pub level: Option<i64>,
    pub count: u64,
}

/// Row counts per anomaly level, rendered as `{"level_<N>": count}` in
/// ascending level order. The NULL group renders as `level_None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts(pub Vec<LevelCount>);

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            let key = match entry.level {
                Some(level) => format!("level_{}", level),
                None => "level_None".to_string(),
            };
            map.serialize_entry(&key, &entry.count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: Option<String>,
    pub count: u64,
}

/// Grouped statistics as read from the store, before presentation rounding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStatistics {
    pub levels: LevelCounts,
    pub top_locations: Vec<LocationCount>,
    pub average_score: Option<f64>,
}
