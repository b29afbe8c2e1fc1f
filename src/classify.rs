use std::path::Path;

use mime_guess::MimeGuess;

/// Looks up a type label for a file from its name.
pub trait FileClassifier {
    /// Returns the label, or an empty string when the type is unknown.
    fn type_name(&self, path: &Path) -> String;
}

/// Classifies files by the MIME type registered for their extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeClassifier;

impl FileClassifier for MimeClassifier {
    fn type_name(&self, path: &Path) -> String {
        MimeGuess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default()
    }
}

/// File type label of `path` as reported by [`MimeClassifier`].
pub fn file_type<P: AsRef<Path>>(path: P) -> String {
    MimeClassifier.type_name(path.as_ref())
}

/// Subtype part of a MIME string (`image/pjpeg` gives `pjpeg`), or an empty
/// string when the value is not of the form `type/subtype`.
pub fn mime_content_type(mime_type: &str) -> String {
    let parts: Vec<&str> = mime_type.split('/').collect();
    if parts.len() == 2 { parts[1].trim().to_string() } else { String::new() }
}
