//! Where a snapshot comes from: a local file or an HTTP endpoint.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Client;

use super::Snapshot;
use crate::error::SnapshotError;

/// Location of the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    File(PathBuf),
    Url(String),
}

impl SnapshotSource {
    /// Fetch and decode the snapshot. Called once per view; never retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the HTTP request fails
    /// or returns a non-success status, or the body is not a valid snapshot.
    pub async fn load(&self) -> Result<Snapshot, SnapshotError> {
        let body = match self {
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SnapshotError::Read {
                    path: path.clone(),
                    source,
                })?,
            Self::Url(url) => fetch(url).await?,
        };

        let snapshot = Snapshot::from_json(&body)?;
        tracing::debug!(
            source = %self,
            assignments = snapshot.assignments.len(),
            classes = snapshot.classes.len(),
            services = snapshot.services.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}

async fn fetch(url: &str) -> Result<String, SnapshotError> {
    let resp = Client::new().get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(SnapshotError::HttpStatus {
            status: status.as_u16(),
        });
    }
    Ok(resp.text().await?)
}

impl FromStr for SnapshotSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
