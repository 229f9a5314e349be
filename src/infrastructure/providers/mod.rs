// src/infrastructure/providers/mod.rs
mod error;
mod in_memory;
mod json_file;

pub use in_memory::InMemorySpeakerProvider;
pub use json_file::JsonFileSpeakerProvider;
