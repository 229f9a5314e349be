// tests/support/mocks.rs
use async_trait::async_trait;
use snackare_core::domain::errors::{DomainError, DomainResult};
use snackare_core::domain::speaker::{SpeakerProvider, SpeakerRecord};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider that always fails, standing in for an unreachable data source.
pub struct FailingProvider;

#[async_trait]
impl SpeakerProvider for FailingProvider {
    async fn fetch_all(&self) -> DomainResult<Vec<SpeakerRecord>> {
        Err(DomainError::Provider("speaker source unreachable".into()))
    }
}

/// Provider that counts how often the roster is fetched.
pub struct CountingProvider {
    speakers: Vec<SpeakerRecord>,
    calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(speakers: Vec<SpeakerRecord>) -> Self {
        Self {
            speakers,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeakerProvider for CountingProvider {
    async fn fetch_all(&self) -> DomainResult<Vec<SpeakerRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.speakers.clone())
    }
}
