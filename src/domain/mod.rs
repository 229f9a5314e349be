pub mod errors;
pub mod speaker;
