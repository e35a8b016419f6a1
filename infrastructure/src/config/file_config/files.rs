//! Quiz file configuration from TOML (`[files]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw quiz-file configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFilesConfig {
    /// Quiz file to open when none is given on the command line
    pub default_path: Option<PathBuf>,
    /// Pretty-print saved JSON (indentation is cosmetic either way)
    pub pretty: bool,
}

impl Default for FileFilesConfig {
    fn default() -> Self {
        Self {
            default_path: None,
            pretty: true,
        }
    }
}
