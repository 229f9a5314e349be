use crate::domain::errors::DomainResult;
use crate::domain::speaker::{SpeakerProvider, SpeakerRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Serves a fixed roster held in memory.
#[derive(Clone, Default)]
pub struct InMemorySpeakerProvider {
    speakers: Arc<Vec<SpeakerRecord>>,
}

impl InMemorySpeakerProvider {
    #[must_use]
    pub fn new(speakers: Vec<SpeakerRecord>) -> Self {
        Self {
            speakers: Arc::new(speakers),
        }
    }
}

#[async_trait]
impl SpeakerProvider for InMemorySpeakerProvider {
    async fn fetch_all(&self) -> DomainResult<Vec<SpeakerRecord>> {
        Ok(self.speakers.as_ref().clone())
    }
}
