use crate::domain::speaker::{ListingEntry, RoleTag, SpeakerRecord, role_label};
use serde::{Deserialize, Serialize};

/// Listing heading shown when no category is selected.
pub const ALL_SPEAKERS_HEADING: &str = "Alla Snackare";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerCardDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub path: String,
    pub roles: Vec<String>,
    pub topics: Vec<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl From<&SpeakerRecord> for SpeakerCardDto {
    fn from(speaker: &SpeakerRecord) -> Self {
        let slug = speaker.slug();
        Self {
            id: speaker.id.to_string(),
            name: speaker.name.clone(),
            path: slug.profile_path(),
            slug: slug.into(),
            roles: display_roles(speaker),
            topics: speaker.topics.clone().unwrap_or_default(),
            short_description: speaker.short_description.clone(),
            img_url: speaker.img_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerProfileDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub path: String,
    pub roles: Vec<String>,
    pub topics: Vec<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
    pub example_lectures: Vec<String>,
    pub reviews: Vec<String>,
}

impl From<&SpeakerRecord> for SpeakerProfileDto {
    fn from(speaker: &SpeakerRecord) -> Self {
        let slug = speaker.slug();
        Self {
            id: speaker.id.to_string(),
            name: speaker.name.clone(),
            path: slug.profile_path(),
            slug: slug.into(),
            roles: display_roles(speaker),
            topics: speaker.topics.clone().unwrap_or_default(),
            short_description: speaker.short_description.clone(),
            header: speaker.header.clone(),
            long_description: speaker.long_description.clone(),
            img_url: speaker.img_url.clone(),
            example_lectures: speaker.example_lectures.clone(),
            reviews: speaker.reviews.clone(),
        }
    }
}

fn display_roles(speaker: &SpeakerRecord) -> Vec<String> {
    speaker
        .active_roles()
        .map(|key| role_label(key).to_owned())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingEntryDto {
    Heading { letter: String },
    Speaker { speaker: SpeakerCardDto },
}

impl From<ListingEntry<'_>> for ListingEntryDto {
    fn from(entry: ListingEntry<'_>) -> Self {
        match entry {
            ListingEntry::Heading(letter) => Self::Heading { letter },
            ListingEntry::Speaker(speaker) => Self::Speaker {
                speaker: speaker.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerListingDto {
    pub heading: String,
    pub search: String,
    #[serde(default)]
    pub category: Option<RoleTag>,
    pub total: usize,
    pub entries: Vec<ListingEntryDto>,
}

impl SpeakerListingDto {
    #[must_use]
    pub fn heading_for(category: Option<RoleTag>) -> &'static str {
        category.map_or(ALL_SPEAKERS_HEADING, RoleTag::heading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPathDto {
    pub slug: String,
    pub path: String,
}
