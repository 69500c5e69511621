use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use backend_domain::{ArtifactError, ArtifactRepository};

/// Candidate artifact written wholesale by the external analysis process.
pub struct CandidateArtifactFile {
    path: PathBuf,
}

impl CandidateArtifactFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtifactRepository for CandidateArtifactFile {
    async fn read_candidate_artifact(&self) -> Result<Value, ArtifactError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ArtifactError::NotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(err) => return Err(ArtifactError::Read(err.to_string())),
        };
        serde_json::from_str(&content).map_err(|err| ArtifactError::Read(err.to_string()))
    }
}
