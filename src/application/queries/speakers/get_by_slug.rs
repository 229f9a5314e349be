use super::SpeakerQueryService;
use crate::{
    application::{
        dto::SpeakerProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::speaker::require_by_slug,
};

pub struct GetSpeakerBySlugQuery {
    pub slug: String,
}

impl SpeakerQueryService {
    pub async fn get_speaker_by_slug(
        &self,
        query: GetSpeakerBySlugQuery,
    ) -> ApplicationResult<SpeakerProfileDto> {
        let speakers = self.load_roster().await?;

        require_by_slug(&query.slug, &speakers)
            .map(SpeakerProfileDto::from)
            .map_err(ApplicationError::from_domain)
    }
}
