use std::collections::HashMap;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::speaker::entity::SpeakerRecord;
use crate::domain::speaker::value_objects::{SpeakerId, SpeakerSlug};

pub const SPEAKER_NOT_FOUND: &str = "Talaren hittades inte.";

/// Finds the first record, in provider order, whose name encodes to `slug`.
#[must_use]
pub fn resolve_by_slug<'a>(slug: &str, speakers: &'a [SpeakerRecord]) -> Option<&'a SpeakerRecord> {
    speakers.iter().find(|speaker| speaker.slug() == *slug)
}

/// Like [`resolve_by_slug`], but a miss is an error.
///
/// # Errors
///
/// Returns [`DomainError::NotFound`] when no record encodes to `slug`.
pub fn require_by_slug<'a>(
    slug: &str,
    speakers: &'a [SpeakerRecord],
) -> DomainResult<&'a SpeakerRecord> {
    resolve_by_slug(slug, speakers)
        .ok_or_else(|| DomainError::NotFound(SPEAKER_NOT_FOUND.to_owned()))
}

/// Two or more records whose names encode to the same slug. `winner` is the
/// record `resolve_by_slug` returns; the rest are unreachable by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: SpeakerSlug,
    pub winner: SpeakerId,
    pub shadowed: Vec<SpeakerId>,
}

#[must_use]
pub fn find_slug_collisions(speakers: &[SpeakerRecord]) -> Vec<SlugCollision> {
    let mut order: Vec<SpeakerSlug> = Vec::new();
    let mut seen: HashMap<SpeakerSlug, SlugCollision> = HashMap::new();

    for speaker in speakers {
        let slug = speaker.slug();
        if slug.is_empty() {
            continue;
        }
        match seen.get_mut(&slug) {
            Some(entry) => entry.shadowed.push(speaker.id.clone()),
            None => {
                order.push(slug.clone());
                seen.insert(
                    slug.clone(),
                    SlugCollision {
                        slug,
                        winner: speaker.id.clone(),
                        shadowed: Vec::new(),
                    },
                );
            }
        }
    }

    order
        .into_iter()
        .filter_map(|slug| seen.remove(&slug))
        .filter(|entry| !entry.shadowed.is_empty())
        .collect()
}

/// Refuses a roster that has any slug collision.
///
/// # Errors
///
/// Returns [`DomainError::Conflict`] naming the collision count and the first
/// colliding slug.
pub fn reject_collisions(collisions: &[SlugCollision]) -> DomainResult<()> {
    match collisions.first() {
        Some(first) => Err(DomainError::Conflict(format!(
            "{} speaker slug collision(s), first: {}",
            collisions.len(),
            first.slug
        ))),
        None => Ok(()),
    }
}
