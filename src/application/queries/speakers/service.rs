use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::speaker::{SpeakerProvider, SpeakerRecord, find_slug_collisions, reject_collisions},
};

pub struct SpeakerQueryService {
    pub(super) provider: Arc<dyn SpeakerProvider>,
    strict_slugs: bool,
}

impl SpeakerQueryService {
    #[must_use]
    pub fn new(provider: Arc<dyn SpeakerProvider>, strict_slugs: bool) -> Self {
        Self {
            provider,
            strict_slugs,
        }
    }

    /// Fetches the roster for one request cycle and checks it for slug
    /// collisions. Collisions are logged, or rejected in strict mode.
    pub(super) async fn load_roster(&self) -> ApplicationResult<Vec<SpeakerRecord>> {
        let speakers = self.provider.fetch_all().await.map_err(|err| {
            tracing::error!(error = %err, "failed to fetch speakers");
            ApplicationError::from_domain(err)
        })?;

        let collisions = find_slug_collisions(&speakers);
        if self.strict_slugs {
            reject_collisions(&collisions).map_err(ApplicationError::from_domain)?;
        }
        for collision in &collisions {
            tracing::warn!(
                slug = %collision.slug,
                winner = %collision.winner,
                shadowed = collision.shadowed.len(),
                "speaker slug collision, later records are unreachable"
            );
        }

        Ok(speakers)
    }
}
