use ropey::Rope;
use std::path::{Path, PathBuf};

/// In-memory mirror of one open document.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualFile {
    version: i32,
    text: Rope,
    /// Temp file holding a copy of the text, once one has been written
    snapshot_path: Option<PathBuf>,
}

impl VirtualFile {
    /// Create a document with no snapshot
    pub fn new(version: i32, text: &str) -> Self {
        Self::from_rope(version, Rope::from_str(text))
    }

    pub fn from_rope(version: i32, text: Rope) -> Self {
        Self {
            version,
            text,
            snapshot_path: None,
        }
    }

    /// Get the document version
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Get the text content
    pub fn text(&self) -> &Rope {
        &self.text
    }

    /// Get the snapshot path, if the document has been persisted
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Copy of this document with new text and version.
    ///
    /// The snapshot path is kept only when `keep_snapshot` is set.
    pub(crate) fn with_text(&self, version: i32, text: Rope, keep_snapshot: bool) -> Self {
        Self {
            version,
            text,
            snapshot_path: if keep_snapshot {
                self.snapshot_path.clone()
            } else {
                None
            },
        }
    }

    pub(crate) fn with_snapshot(&self, path: PathBuf) -> Self {
        Self {
            snapshot_path: Some(path),
            ..self.clone()
        }
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }
}
