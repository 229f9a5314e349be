pub mod collation;
pub mod entity;
pub mod query;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::SpeakerRecord;
pub use query::{ListingEntry, filter_speakers, group_by_first_letter, sort_speakers};
pub use repository::SpeakerProvider;
pub use services::{
    SPEAKER_NOT_FOUND, SlugCollision, find_slug_collisions, reject_collisions, require_by_slug,
    resolve_by_slug,
};
pub use value_objects::{RoleTag, SpeakerId, SpeakerSlug, role_label};
