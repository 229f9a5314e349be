use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug character class regex"));

/// Opaque identifier assigned by the speaker provider. Accepts either a JSON
/// string or a JSON integer and is always carried as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSpeakerId", into = "String")]
pub struct SpeakerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpeakerId {
    Text(String),
    Number(i64),
}

impl From<RawSpeakerId> for SpeakerId {
    fn from(value: RawSpeakerId) -> Self {
        match value {
            RawSpeakerId::Text(text) => Self(text),
            RawSpeakerId::Number(number) => Self(number.to_string()),
        }
    }
}

impl SpeakerId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SpeakerId> for String {
    fn from(value: SpeakerId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    Lecturer,
    Moderator,
    Entertainer,
}

struct RoleEntry {
    key: &'static str,
    label: &'static str,
    heading: &'static str,
}

// Indexed by `RoleTag as usize`; keep in declaration order.
static ROLE_TABLE: [RoleEntry; 3] = [
    RoleEntry {
        key: "lecturer",
        label: "föreläsare",
        heading: "Föreläsare",
    },
    RoleEntry {
        key: "moderator",
        label: "moderator",
        heading: "Moderatorer",
    },
    RoleEntry {
        key: "entertainer",
        label: "underhållare",
        heading: "Underhållare",
    },
];

impl RoleTag {
    pub const ALL: [Self; 3] = [Self::Lecturer, Self::Moderator, Self::Entertainer];

    fn entry(self) -> &'static RoleEntry {
        &ROLE_TABLE[self as usize]
    }

    /// Tag as it appears in the provider's `roles` mapping.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().key
    }

    /// Swedish display label, used when matching search terms.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Plural heading shown above a category-filtered listing.
    #[must_use]
    pub fn heading(self) -> &'static str {
        self.entry().heading
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == key)
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTag {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        Self::from_key(value)
            .ok_or_else(|| DomainError::Validation(format!("unknown role category: {value}")))
    }
}

/// Display label for a raw role key. Keys outside the known set pass through.
#[must_use]
pub fn role_label(key: &str) -> &str {
    RoleTag::from_key(key).map_or(key, |tag| tag.label())
}

/// URL-safe identifier derived from a speaker's display name.
///
/// The mapping is fixed: previously published profile URLs depend on it, so
/// only å/ä/ö are transliterated and every other non `[a-z0-9]` character
/// becomes a hyphen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerSlug(String);

impl SpeakerSlug {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let folded: String = name
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'å' | 'ä' => 'a',
                'ö' => 'o',
                other => other,
            })
            .collect();

        let hyphenated = NON_SLUG_RUN.replace_all(&folded, "-");
        let trimmed = hyphenated.strip_prefix('-').unwrap_or(&hyphenated);
        let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);

        Self(trimmed.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Profile page path the listing links to.
    #[must_use]
    pub fn profile_path(&self) -> String {
        format!("/forelasare/{}", self.0)
    }
}

impl fmt::Display for SpeakerSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SpeakerSlug> for String {
    fn from(value: SpeakerSlug) -> Self {
        value.0
    }
}

impl PartialEq<str> for SpeakerSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
