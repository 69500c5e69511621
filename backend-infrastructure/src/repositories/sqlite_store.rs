use std::time::Duration;

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, Row};
use tokio::task;
use tracing::warn;

use backend_domain::{
    AnomalyRepository, AnomalyRow, EventSummary, LevelCount, LevelCounts, LocationCount,
    RawStatistics, StatusCounts, StoreConfig, StoreError, RARE_SIGNAL_LEVEL, RARE_SIGNAL_SCORE,
    ULTRA_RARE_THRESHOLD,
};

const SUMMARY_COLUMNS: &str =
    "id, timestamp_utc, geo_tag, anomaly_score, anomaly_level, packet_size";

/// Read-only accessor over the `anomalies` table.
///
/// Holds no connection; each call opens one, uses it, and closes it.
#[derive(Clone)]
pub struct SqliteAnomalyRepo {
    config: StoreConfig,
}

impl SqliteAnomalyRepo {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Runs `f` against a freshly opened connection on a blocking worker.
    ///
    /// The connection is closed whether `f` succeeds or fails, and dropped
    /// during unwinding if `f` panics.
    pub async fn with_connection<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let config = self.config.clone();
        task::spawn_blocking(move || {
            let connection = open_connection(&config)?;
            let result = f(&connection).map_err(|err| StoreError::Query(err.to_string()));
            if let Err((_, err)) = connection.close() {
                warn!("failed to close store connection: {}", err);
            }
            result
        })
        .await
        .map_err(|err| StoreError::Query(format!("store worker failed: {}", err)))?
    }
}

#[async_trait]
impl AnomalyRepository for SqliteAnomalyRepo {
    async fn fetch_status_counts(&self) -> Result<StatusCounts, StoreError> {
        self.with_connection(|conn| {
            let total: i64 = conn.query_row("SELECT COUNT(*) FROM anomalies", [], |row| row.get(0))?;
            let level3: i64 = conn.query_row(
                "SELECT COUNT(*) FROM anomalies WHERE anomaly_score = ?1",
                params![RARE_SIGNAL_SCORE],
                |row| row.get(0),
            )?;
            let ultra_rare: i64 = conn.query_row(
                "SELECT COUNT(*) FROM anomalies WHERE anomaly_score >= ?1",
                params![ULTRA_RARE_THRESHOLD],
                |row| row.get(0),
            )?;
            Ok(StatusCounts {
                total_anomalies: to_count(total),
                level3_events: to_count(level3),
                ultra_rare_events: to_count(ultra_rare),
            })
        })
        .await
    }

    async fn fetch_rare_signal_rows(&self, limit: usize) -> Result<Vec<AnomalyRow>, StoreError> {
        let limit = to_limit(limit);
        self.with_connection(move |conn| {
            let sql = format!(
                "SELECT {SUMMARY_COLUMNS}, protocol_info \
                 FROM anomalies \
                 WHERE anomaly_score = ?1 AND anomaly_level = ?2 \
                 ORDER BY timestamp_utc DESC \
                 LIMIT ?3"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![RARE_SIGNAL_SCORE, RARE_SIGNAL_LEVEL, limit], |row| {
                Ok(AnomalyRow {
                    summary: map_summary(row)?,
                    protocol_info: nested_column(row, 6)?,
                    structural_analysis: None,
                    pattern_analysis: None,
                })
            })?;
            rows.collect()
        })
        .await
    }

    async fn fetch_ultra_rare_rows(&self) -> Result<Vec<AnomalyRow>, StoreError> {
        self.with_connection(|conn| {
            let sql = format!(
                "SELECT {SUMMARY_COLUMNS}, protocol_info, structural_analysis, pattern_analysis \
                 FROM anomalies \
                 WHERE anomaly_score >= ?1 \
                 ORDER BY anomaly_score DESC, timestamp_utc DESC"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![ULTRA_RARE_THRESHOLD], |row| {
                Ok(AnomalyRow {
                    summary: map_summary(row)?,
                    protocol_info: nested_column(row, 6)?,
                    structural_analysis: nested_column(row, 7)?,
                    pattern_analysis: nested_column(row, 8)?,
                })
            })?;
            rows.collect()
        })
        .await
    }

    async fn fetch_recent(&self, limit: usize) -> Result<Vec<EventSummary>, StoreError> {
        let limit = to_limit(limit);
        self.with_connection(move |conn| {
            let sql = format!(
                "SELECT {SUMMARY_COLUMNS} FROM anomalies ORDER BY timestamp_utc DESC LIMIT ?1"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![limit], map_summary)?;
            rows.collect()
        })
        .await
    }

    async fn fetch_statistics(&self, top_locations: usize) -> Result<RawStatistics, StoreError> {
        let limit = to_limit(top_locations);
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT anomaly_level, COUNT(*) FROM anomalies \
                 GROUP BY anomaly_level ORDER BY anomaly_level",
            )?;
            let levels = stmt
                .query_map([], |row| {
                    Ok(LevelCount {
                        level: row.get(0)?,
                        count: to_count(row.get(1)?),
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            // Ties on count fall back to the location name so the ranking is stable.
            let mut stmt = conn.prepare(
                "SELECT geo_tag, COUNT(*) AS count FROM anomalies \
                 GROUP BY geo_tag ORDER BY count DESC, geo_tag ASC LIMIT ?1",
            )?;
            let top_locations = stmt
                .query_map(params![limit], |row| {
                    Ok(LocationCount {
                        location: row.get(0)?,
                        count: to_count(row.get(1)?),
                    })
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            let average_score: Option<f64> =
                conn.query_row("SELECT AVG(anomaly_score) FROM anomalies", [], |row| row.get(0))?;

            Ok(RawStatistics {
                levels: LevelCounts(levels),
                top_locations,
                average_score,
            })
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.with_connection(|conn| conn.query_row("SELECT 1", [], |_| Ok(())))
            .await
    }
}

fn open_connection(config: &StoreConfig) -> Result<Connection, StoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let connection = Connection::open_with_flags(&config.database_path, flags).map_err(|err| {
        StoreError::Unavailable(format!("{}: {}", config.database_path.display(), err))
    })?;
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| StoreError::Unavailable(err.to_string()))?;
    Ok(connection)
}

fn map_summary(row: &Row<'_>) -> rusqlite::Result<EventSummary> {
    Ok(EventSummary {
        id: row.get(0)?,
        timestamp_utc: row.get(1)?,
        geo_tag: row.get(2)?,
        anomaly_score: row.get(3)?,
        anomaly_level: row.get(4)?,
        packet_size: row.get(5)?,
    })
}

/// Raw bytes of a nested column. Text and blob storage are both accepted;
/// any other storage class reads as absent.
fn nested_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Vec<u8>>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    })
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

fn to_limit(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
