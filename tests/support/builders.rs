// tests/support/builders.rs
use snackare_core::domain::speaker::{RoleTag, SpeakerRecord};

pub struct SpeakerBuilder {
    record: SpeakerRecord,
}

impl SpeakerBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record: SpeakerRecord::new(id, name),
        }
    }

    pub fn role(mut self, tag: RoleTag) -> Self {
        self.record = self.record.with_role(tag.as_str(), true);
        self
    }

    pub fn inactive_role(mut self, tag: RoleTag) -> Self {
        self.record = self.record.with_role(tag.as_str(), false);
        self
    }

    pub fn topics(mut self, topics: &[&str]) -> Self {
        self.record = self.record.with_topics(topics.iter().copied());
        self
    }

    pub fn short_description(mut self, text: &str) -> Self {
        self.record.short_description = Some(text.into());
        self
    }

    pub fn reviews(mut self, reviews: &[&str]) -> Self {
        self.record.reviews = reviews.iter().map(|r| (*r).to_string()).collect();
        self
    }

    pub fn build(self) -> SpeakerRecord {
        self.record
    }
}

/// Small roster covering every role, accented initials and a speaker without roles.
pub fn sample_roster() -> Vec<SpeakerRecord> {
    vec![
        SpeakerBuilder::new("1", "Björn Åkesson")
            .role(RoleTag::Entertainer)
            .topics(&["Humor", "Improvisation"])
            .build(),
        SpeakerBuilder::new("2", "Anna Öberg")
            .role(RoleTag::Lecturer)
            .role(RoleTag::Moderator)
            .inactive_role(RoleTag::Entertainer)
            .topics(&["Ledarskap", "Hållbarhet"])
            .short_description("Föreläser om hållbart ledarskap.")
            .reviews(&["Inspirerande och konkret."])
            .build(),
        SpeakerBuilder::new("3", "Örjan Nilsson")
            .role(RoleTag::Lecturer)
            .topics(&["Motivation"])
            .build(),
        SpeakerBuilder::new("4", "Zlatan Berg").build(),
        SpeakerBuilder::new("5", "Anders Ek")
            .role(RoleTag::Entertainer)
            .build(),
        SpeakerBuilder::new("6", "Olle Holm").role(RoleTag::Moderator).build(),
    ]
}
