use async_trait::async_trait;

use crate::entities::{AnomalyRow, EventSummary, RawStatistics, StatusCounts};
use crate::errors::{ArtifactError, StoreError};

/// Read-only access to the `anomalies` table.
///
/// Every method runs on its own scoped connection; nothing is shared between calls.
#[async_trait]
pub trait AnomalyRepository: Send + Sync {
    async fn fetch_status_counts(&self) -> Result<StatusCounts, StoreError>;
    async fn fetch_rare_signal_rows(&self, limit: usize) -> Result<Vec<AnomalyRow>, StoreError>;
    async fn fetch_ultra_rare_rows(&self) -> Result<Vec<AnomalyRow>, StoreError>;
    async fn fetch_recent(&self, limit: usize) -> Result<Vec<EventSummary>, StoreError>;
    async fn fetch_statistics(&self, top_locations: usize) -> Result<RawStatistics, StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Returns the full parsed contents of the candidate artifact.
    async fn read_candidate_artifact(&self) -> Result<serde_json::Value, ArtifactError>;
}
