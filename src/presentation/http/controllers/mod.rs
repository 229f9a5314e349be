pub mod speakers;
