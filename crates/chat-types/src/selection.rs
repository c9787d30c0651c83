use serde::{Deserialize, Serialize};

/// Result of the external file picker, normalized.
///
/// The empty path is the canonical "nothing selected" value: the picker
/// reports cancellation as `""`, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    path: String,
}

impl FileSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_selected(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Final path segment, split on whichever of `/` or `\` occurs last.
    /// `None` when nothing is selected.
    pub fn display_name(&self) -> Option<&str> {
        if self.path.is_empty() {
            return None;
        }
        let start = self
            .path
            .rfind(|c| c == '/' || c == '\\')
            .map(|i| i + 1)
            .unwrap_or(0);
        Some(&self.path[start..])
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }
}
