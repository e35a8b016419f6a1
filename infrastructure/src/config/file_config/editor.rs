//! Editor configuration from TOML (`[editor]` section)

use serde::{Deserialize, Serialize};

/// Raw editor configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEditorConfig {
    /// Maximum bytes of question text shown in list labels
    pub preview_len: usize,
    /// Ask for confirmation before removing a question
    pub confirm_remove: bool,
}

impl Default for FileEditorConfig {
    fn default() -> Self {
        Self {
            preview_len: 60,
            confirm_remove: true,
        }
    }
}
