use super::SpeakerQueryService;
use crate::application::{dto::StaticPathDto, error::ApplicationResult};

impl SpeakerQueryService {
    /// One profile route per speaker. Records without a usable name are
    /// skipped since no route can point at them.
    pub async fn list_static_paths(&self) -> ApplicationResult<Vec<StaticPathDto>> {
        let speakers = self.load_roster().await?;

        let paths = speakers
            .iter()
            .filter_map(|speaker| {
                let slug = speaker.slug();
                if slug.is_empty() {
                    tracing::error!(id = %speaker.id, name = %speaker.name, "speaker has no usable name, skipping route");
                    return None;
                }
                Some(StaticPathDto {
                    path: slug.profile_path(),
                    slug: slug.into(),
                })
            })
            .collect();

        Ok(paths)
    }
}
