use crate::domain::errors::DomainResult;
use crate::domain::speaker::entity::SpeakerRecord;
use async_trait::async_trait;

/// Source of the speaker roster. Called once per request cycle; the order of
/// the returned records decides which record wins a slug collision.
#[async_trait]
pub trait SpeakerProvider: Send + Sync {
    async fn fetch_all(&self) -> DomainResult<Vec<SpeakerRecord>>;
}
