//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default so a partial (or absent) file is fine.

mod editor;
mod files;

pub use editor::FileEditorConfig;
pub use files::FileFilesConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Editor behaviour
    pub editor: FileEditorConfig,
    /// Quiz file handling
    pub files: FileFilesConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = FileConfig::default();
        assert_eq!(config.editor.preview_len, 60);
        assert!(config.editor.confirm_remove);
        assert!(config.files.pretty);
        assert!(config.files.default_path.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let config: FileConfig = toml::from_str(
            r#"
            [editor]
            preview_len = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.editor.preview_len, 40);
        assert!(config.editor.confirm_remove);
        assert!(config.files.pretty);
    }
}
