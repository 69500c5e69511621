pub mod artifact_queries;
pub mod health_queries;
pub mod stats_queries;
pub mod status_queries;
pub mod tier_queries;
