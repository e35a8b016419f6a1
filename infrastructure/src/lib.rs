//! Infrastructure layer for quizsmith
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the JSON quiz-file repository and configuration file
//! loading.

pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileEditorConfig, FileFilesConfig};
pub use persistence::JsonFileRepository;
