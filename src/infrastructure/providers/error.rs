use crate::domain::errors::DomainError;
use std::path::Path;

pub fn map_io(path: &Path, err: &std::io::Error) -> DomainError {
    DomainError::Provider(format!("failed to read {}: {err}", path.display()))
}

pub fn map_json(path: &Path, err: &serde_json::Error) -> DomainError {
    DomainError::Provider(format!(
        "invalid speaker data in {} at line {}, column {}: {err}",
        path.display(),
        err.line(),
        err.column()
    ))
}
