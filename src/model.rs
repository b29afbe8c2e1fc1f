use std::path::PathBuf;

use serde::Serialize;

/// Result of inspecting a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub file_type: String,
    pub content_type: String,
    pub length: u64,
    pub size: String,
}

impl FileReport {
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Type label for display, falling back when the classifier had none.
    pub fn type_label(&self) -> &str {
        if self.file_type.is_empty() { "unknown" } else { &self.file_type }
    }
}
