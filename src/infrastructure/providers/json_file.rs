use super::error::{map_io, map_json};
use crate::domain::errors::DomainResult;
use crate::domain::speaker::{SpeakerProvider, SpeakerRecord};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted document shapes: a bare array of speakers, or an object wrapping
/// the array under `speakers`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    List(Vec<SpeakerRecord>),
    Wrapped { speakers: Vec<SpeakerRecord> },
}

impl From<RosterDocument> for Vec<SpeakerRecord> {
    fn from(document: RosterDocument) -> Self {
        match document {
            RosterDocument::List(speakers) | RosterDocument::Wrapped { speakers } => speakers,
        }
    }
}

/// Reads the roster from a JSON export on every fetch, so edits to the file
/// show up on the next request without a restart.
#[derive(Clone, Debug)]
pub struct JsonFileSpeakerProvider {
    path: PathBuf,
}

impl JsonFileSpeakerProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SpeakerProvider for JsonFileSpeakerProvider {
    async fn fetch_all(&self) -> DomainResult<Vec<SpeakerRecord>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|err| map_io(&self.path, &err))?;
        let document: RosterDocument =
            serde_json::from_slice(&raw).map_err(|err| map_json(&self.path, &err))?;
        let speakers: Vec<SpeakerRecord> = document.into();

        tracing::debug!(path = %self.path.display(), count = speakers.len(), "loaded speakers");
        Ok(speakers)
    }
}
