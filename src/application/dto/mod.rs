pub mod speakers;

pub use speakers::{
    ListingEntryDto, SpeakerCardDto, SpeakerListingDto, SpeakerProfileDto, StaticPathDto,
};
