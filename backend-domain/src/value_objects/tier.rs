// Classification tier value object
// Tiers are point predicates over anomaly_score / anomaly_level evaluated at query time.

/// Discrete score assigned to the rare-signal bucket. Compared by equality.
pub const RARE_SIGNAL_SCORE: f64 = 75.0;
pub const RARE_SIGNAL_LEVEL: i64 = 3;
/// Open-ended lower bound of the ultra-rare bucket.
pub const ULTRA_RARE_THRESHOLD: f64 = 95.0;

pub const RARE_SIGNAL_LIMIT: usize = 200;
pub const RECENT_LIMIT: usize = 100;
pub const TOP_LOCATIONS_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationTier {
    RareSignal,
    UltraRare,
}

impl ClassificationTier {
    pub fn label(&self) -> &'static str {
        match self {
            ClassificationTier::RareSignal => "RARE_SIGNAL (Level 3)",
            ClassificationTier::UltraRare => "ULTRA_RARE / NON_HUMAN (Level 4+)",
        }
    }

    /// A NULL level never satisfies the rare-signal level condition.
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, score: f64, level: Option<i64>) -> bool {
        match self {
            ClassificationTier::RareSignal => {
                score == RARE_SIGNAL_SCORE && level == Some(RARE_SIGNAL_LEVEL)
            }
            ClassificationTier::UltraRare => score >= ULTRA_RARE_THRESHOLD,
        }
    }
}
