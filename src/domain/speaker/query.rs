use crate::domain::speaker::collation::compare_names;
use crate::domain::speaker::entity::SpeakerRecord;
use crate::domain::speaker::specifications::{CategorySpec, SearchSpec};
use crate::domain::speaker::value_objects::RoleTag;

/// Heading used for speakers whose name has no first character.
pub const EMPTY_NAME_HEADING: &str = "#";

/// One row of a grouped listing: either a letter heading or a speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry<'a> {
    Heading(String),
    Speaker(&'a SpeakerRecord),
}

#[must_use]
pub fn filter_speakers<'a>(
    speakers: &'a [SpeakerRecord],
    search_term: &str,
    category: Option<RoleTag>,
) -> Vec<&'a SpeakerRecord> {
    let category = CategorySpec::new(category);
    let search = SearchSpec::new(search_term);

    speakers
        .iter()
        .filter(|speaker| category.is_satisfied_by(speaker) && search.is_satisfied_by(speaker))
        .collect()
}

/// Stable sort by name in collation order.
pub fn sort_speakers(speakers: &mut [&SpeakerRecord]) {
    speakers.sort_by(|a, b| compare_names(&a.name, &b.name));
}

#[must_use]
pub fn first_letter(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| EMPTY_NAME_HEADING.to_owned(), |c| c.to_uppercase().collect())
}

/// Emits a heading whenever the initial changes from the previous speaker,
/// so an initial can head more than one run of the sorted listing.
#[must_use]
pub fn group_by_first_letter<'a>(sorted: &[&'a SpeakerRecord]) -> Vec<ListingEntry<'a>> {
    let mut entries = Vec::with_capacity(sorted.len() * 2);
    let mut current: Option<String> = None;

    for &speaker in sorted {
        let letter = first_letter(&speaker.name);
        if current.as_deref() != Some(letter.as_str()) {
            entries.push(ListingEntry::Heading(letter.clone()));
            current = Some(letter);
        }
        entries.push(ListingEntry::Speaker(speaker));
    }

    entries
}
