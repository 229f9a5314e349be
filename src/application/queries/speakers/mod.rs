mod get_by_slug;
mod list;
mod paths;
mod service;

pub use get_by_slug::GetSpeakerBySlugQuery;
pub use list::ListSpeakersQuery;
pub use service::SpeakerQueryService;
