use crate::domain::speaker::value_objects::{RoleTag, SpeakerId, SpeakerSlug};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One speaker as delivered by the provider. Read-only to the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRecord {
    #[serde(default)]
    pub id: SpeakerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Option<BTreeMap<String, bool>>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub img_url: Option<String>,
    #[serde(default)]
    pub example_lectures: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl SpeakerRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: SpeakerId::new(id),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_role(mut self, key: impl Into<String>, active: bool) -> Self {
        self.roles
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), active);
        self
    }

    #[must_use]
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = Some(topics.into_iter().map(Into::into).collect());
        self
    }

    /// Role keys whose flag is set. Empty when the record carries no roles.
    pub fn active_roles(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .flatten()
            .filter(|(_, active)| **active)
            .map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn has_role(&self, tag: RoleTag) -> bool {
        self.active_roles().any(|key| key == tag.as_str())
    }

    #[must_use]
    pub fn slug(&self) -> SpeakerSlug {
        SpeakerSlug::from_name(&self.name)
    }
}
