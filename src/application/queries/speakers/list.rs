use super::SpeakerQueryService;
use crate::{
    application::{
        dto::{SpeakerListingDto, speakers::ListingEntryDto},
        error::ApplicationResult,
    },
    domain::speaker::{RoleTag, filter_speakers, group_by_first_letter, sort_speakers},
};

#[derive(Debug, Clone, Default)]
pub struct ListSpeakersQuery {
    pub search: String,
    pub category: Option<RoleTag>,
}

impl SpeakerQueryService {
    pub async fn list_speakers(
        &self,
        query: ListSpeakersQuery,
    ) -> ApplicationResult<SpeakerListingDto> {
        let speakers = self.load_roster().await?;

        let mut matches = filter_speakers(&speakers, &query.search, query.category);
        sort_speakers(&mut matches);
        let total = matches.len();

        let entries = group_by_first_letter(&matches)
            .into_iter()
            .map(ListingEntryDto::from)
            .collect();

        Ok(SpeakerListingDto {
            heading: SpeakerListingDto::heading_for(query.category).to_owned(),
            search: query.search,
            category: query.category,
            total,
            entries,
        })
    }
}
