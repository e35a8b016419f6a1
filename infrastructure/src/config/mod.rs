//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileEditorConfig, FileFilesConfig};
pub use loader::ConfigLoader;
