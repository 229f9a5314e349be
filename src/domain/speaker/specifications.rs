use crate::domain::speaker::entity::SpeakerRecord;
use crate::domain::speaker::value_objects::{RoleTag, role_label};

/// Passes when no category is selected or the speaker holds the category's role.
pub struct CategorySpec {
    category: Option<RoleTag>,
}

impl CategorySpec {
    #[must_use]
    pub const fn new(category: Option<RoleTag>) -> Self {
        Self { category }
    }

    #[must_use]
    pub fn is_satisfied_by(&self, speaker: &SpeakerRecord) -> bool {
        self.category.is_none_or(|tag| speaker.has_role(tag))
    }
}

/// Case-insensitive substring match over name, topics and translated roles.
pub struct SearchSpec {
    needle: String,
}

impl SearchSpec {
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_satisfied_by(&self, speaker: &SpeakerRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        self.matches(&speaker.name)
            || speaker
                .topics
                .iter()
                .flatten()
                .any(|topic| self.matches(topic))
            || speaker
                .active_roles()
                .any(|key| self.matches(role_label(key)))
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> SpeakerRecord {
        SpeakerRecord::new("1", "Anna Öberg")
            .with_role("entertainer", true)
            .with_role("lecturer", false)
            .with_topics(["Hållbarhet", "AI i vården"])
    }

    #[test]
    fn category_spec_requires_active_flag() {
        assert!(CategorySpec::new(None).is_satisfied_by(&anna()));
        assert!(CategorySpec::new(Some(RoleTag::Entertainer)).is_satisfied_by(&anna()));
        assert!(!CategorySpec::new(Some(RoleTag::Lecturer)).is_satisfied_by(&anna()));
    }

    #[test]
    fn search_spec_matches_name_case_insensitively() {
        assert!(SearchSpec::new("ÖBERG").is_satisfied_by(&anna()));
        assert!(SearchSpec::new("na ö").is_satisfied_by(&anna()));
        assert!(!SearchSpec::new("oberg").is_satisfied_by(&anna()));
    }

    #[test]
    fn search_spec_matches_topics() {
        assert!(SearchSpec::new("vården").is_satisfied_by(&anna()));
        assert!(SearchSpec::new("hÅll").is_satisfied_by(&anna()));
    }

    #[test]
    fn search_spec_matches_translated_active_roles_only() {
        assert!(SearchSpec::new("underhåll").is_satisfied_by(&anna()));
        assert!(!SearchSpec::new("entertainer").is_satisfied_by(&anna()));
        assert!(!SearchSpec::new("föreläs").is_satisfied_by(&anna()));
    }

    #[test]
    fn unknown_roles_match_on_their_raw_key() {
        let speaker = SpeakerRecord::new("2", "Kim").with_role("dj", true);
        assert!(SearchSpec::new("dj").is_satisfied_by(&speaker));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(SearchSpec::new("").is_satisfied_by(&SpeakerRecord::new("3", "")));
    }

    #[test]
    fn whitespace_term_is_not_trimmed() {
        assert!(!SearchSpec::new(" ").is_satisfied_by(&SpeakerRecord::new("4", "Kim")));
        assert!(SearchSpec::new(" ").is_satisfied_by(&anna()));
    }
}
