// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::speakers::SpeakerQueryService, domain::speaker::SpeakerProvider,
};

pub struct ApplicationServices {
    pub speaker_queries: Arc<SpeakerQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(provider: Arc<dyn SpeakerProvider>, strict_slugs: bool) -> Self {
        let speaker_queries = Arc::new(SpeakerQueryService::new(
            Arc::clone(&provider),
            strict_slugs,
        ));

        Self { speaker_queries }
    }
}
