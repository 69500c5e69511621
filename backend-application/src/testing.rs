// In-memory repositories for use-case tests

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use backend_domain::{
    AnomalyRepository, AnomalyRow, ArtifactError, ArtifactRepository, ClassificationTier,
    EventSummary, LevelCount, LevelCounts, LocationCount, RawStatistics, RuntimeConfig,
    StatusCounts, StoreError, RARE_SIGNAL_SCORE,
};

use crate::AppState;

pub fn row(id: i64, timestamp: &str, geo: &str, score: f64, level: i64) -> AnomalyRow {
    AnomalyRow {
        summary: EventSummary {
            id,
            timestamp_utc: timestamp.to_string(),
            geo_tag: Some(geo.to_string()),
            anomaly_score: score,
            anomaly_level: Some(level),
            packet_size: Some(512),
        },
        protocol_info: None,
        structural_analysis: None,
        pattern_analysis: None,
    }
}

pub struct FakeAnomalyRepo {
    rows: Vec<AnomalyRow>,
    unavailable: bool,
}

impl FakeAnomalyRepo {
    pub fn with_rows(rows: Vec<AnomalyRow>) -> Self {
        Self {
            rows,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("unable to open database file".to_string()));
        }
        Ok(())
    }

    fn by_timestamp_desc(&self) -> Vec<AnomalyRow> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.summary.timestamp_utc.cmp(&a.summary.timestamp_utc));
        rows
    }
}

#[async_trait]
impl AnomalyRepository for FakeAnomalyRepo {
    async fn fetch_status_counts(&self) -> Result<StatusCounts, StoreError> {
        self.check()?;
        let count = |pred: &dyn Fn(&EventSummary) -> bool| {
            self.rows.iter().filter(|r| pred(&r.summary)).count() as u64
        };
        Ok(StatusCounts {
            total_anomalies: self.rows.len() as u64,
            level3_events: count(&|s: &EventSummary| s.anomaly_score == RARE_SIGNAL_SCORE),
            ultra_rare_events: count(&|s: &EventSummary| {
                ClassificationTier::UltraRare.matches(s.anomaly_score, s.anomaly_level)
            }),
        })
    }

    async fn fetch_rare_signal_rows(&self, limit: usize) -> Result<Vec<AnomalyRow>, StoreError> {
        self.check()?;
        Ok(self
            .by_timestamp_desc()
            .into_iter()
            .filter(|r| {
                ClassificationTier::RareSignal.matches(r.summary.anomaly_score, r.summary.anomaly_level)
            })
            .take(limit)
            .collect())
    }

    async fn fetch_ultra_rare_rows(&self) -> Result<Vec<AnomalyRow>, StoreError> {
        self.check()?;
        let mut rows: Vec<AnomalyRow> = self
            .by_timestamp_desc()
            .into_iter()
            .filter(|r| {
                ClassificationTier::UltraRare.matches(r.summary.anomaly_score, r.summary.anomaly_level)
            })
            .collect();
        rows.sort_by(|a, b| b.summary.anomaly_score.total_cmp(&a.summary.anomaly_score));
        Ok(rows)
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<EventSummary>, StoreError> {
        self.check()?;
        Ok(self
            .by_timestamp_desc()
            .into_iter()
            .take(limit)
            .map(|r| r.summary)
            .collect())
    }

    async fn fetch_statistics(&self, top_locations: usize) -> Result<RawStatistics, StoreError> {
        self.check()?;
        let mut levels: BTreeMap<Option<i64>, u64> = BTreeMap::new();
        let mut locations: HashMap<Option<String>, u64> = HashMap::new();
        for r in &self.rows {
            *levels.entry(r.summary.anomaly_level).or_default() += 1;
            *locations.entry(r.summary.geo_tag.clone()).or_default() += 1;
        }
        let mut ranked: Vec<LocationCount> = locations
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));
        ranked.truncate(top_locations);
        let average_score = if self.rows.is_empty() {
            None
        } else {
            let sum: f64 = self.rows.iter().map(|r| r.summary.anomaly_score).sum();
            Some(sum / self.rows.len() as f64)
        };
        Ok(RawStatistics {
            levels: LevelCounts(
                levels
                    .into_iter()
                    .map(|(level, count)| LevelCount { level, count })
                    .collect(),
            ),
            top_locations: ranked,
            average_score,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

pub enum FakeArtifactRepo {
    Present(Value),
    Missing,
}

#[async_trait]
impl ArtifactRepository for FakeArtifactRepo {
    async fn read_candidate_artifact(&self) -> Result<Value, ArtifactError> {
        match self {
            FakeArtifactRepo::Present(value) => Ok(value.clone()),
            FakeArtifactRepo::Missing => Err(ArtifactError::NotFound {
                path: "candidatos_extraterrestres.json".to_string(),
            }),
        }
    }
}

pub fn state_with(repo: FakeAnomalyRepo) -> AppState {
    state_with_artifact(repo, FakeArtifactRepo::Missing)
}

pub fn state_with_artifact(repo: FakeAnomalyRepo, artifact: FakeArtifactRepo) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            system_name: "Test Veil".to_string(),
            candidate_artifact_path: PathBuf::from("candidatos_extraterrestres.json"),
            candidate_producer: "detector_extraterrestre.py".to_string(),
        },
        anomaly_repo: Arc::new(repo),
        artifact_repo: Arc::new(artifact),
    }
}
