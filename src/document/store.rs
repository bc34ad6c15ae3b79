use crate::document::model::VirtualFile;
use crate::document::snapshot::write_snapshot;
use crate::domain::{EditOperation, VfsEvent, WorkspaceEdit};
use crate::error::{VfsError, VfsResult};
use crate::text::apply_changes;
use crate::uri::{NormalizedUri, TargetOs, Uri, denormalize, normalize};
use im::HashMap;
use std::path::{Path, PathBuf};

/// Behaviour switches for a [`Vfs`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VfsOptions {
    /// Platform whose path rules drive key normalization
    pub target_os: TargetOs,
    /// Where snapshots are written; the system temp dir when None
    pub snapshot_dir: Option<PathBuf>,
    /// Forget a document's snapshot path when its text changes
    pub invalidate_snapshot_on_change: bool,
}

impl VfsOptions {
    pub fn new(target_os: TargetOs) -> Self {
        Self {
            target_os,
            snapshot_dir: None,
            invalidate_snapshot_on_change: true,
        }
    }
}

/// The set of open documents, keyed by normalized URI.
///
/// Every operation leaves `self` untouched and returns the next store.
/// Unchanged entries are shared between the two values.
#[derive(Clone, Debug, PartialEq)]
pub struct Vfs {
    files: HashMap<NormalizedUri, VirtualFile>,
    options: VfsOptions,
}

impl Vfs {
    pub fn new(options: VfsOptions) -> Self {
        Self {
            files: HashMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &VfsOptions {
        &self.options
    }

    /// Store key for `uri`.
    ///
    /// # Errors
    /// See [`normalize`].
    pub fn key(&self, uri: &Uri) -> VfsResult<NormalizedUri> {
        normalize(uri, self.options.target_os)
    }

    /// Open document for `uri`; a URI with no valid key is never open.
    pub fn get(&self, uri: &Uri) -> Option<&VirtualFile> {
        self.files.get(&self.key(uri).ok()?)
    }

    pub fn contains(&self, uri: &Uri) -> bool {
        self.get(uri).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// URIs of all open documents, sorted.
    pub fn uris(&self) -> Vec<Uri> {
        let mut uris: Vec<Uri> = self.files.keys().map(denormalize).collect();
        uris.sort();
        uris
    }

    /// Insert a fresh document, replacing any existing entry for the key.
    ///
    /// # Errors
    /// Fails without touching the store when `uri` has no valid key.
    pub fn open(&self, uri: &Uri, version: i32, text: &str) -> VfsResult<Vfs> {
        let key = self.key(uri)?;
        log::debug!("Opening {} at version {}", uri, version);
        Ok(self.with_files(self.files.update(key, VirtualFile::new(version, text))))
    }

    /// Apply `edits` in order to an open document.
    ///
    /// A change for a document that is not open is logged and ignored: it
    /// can legitimately arrive after a close. A missing version becomes 0.
    ///
    /// # Errors
    /// Fails without touching the store when `uri` has no valid key.
    pub fn change(
        &self,
        uri: &Uri,
        version: Option<i32>,
        edits: &[EditOperation],
    ) -> VfsResult<Vfs> {
        let key = self.key(uri)?;
        let Some(file) = self.files.get(&key) else {
            log::warn!(
                target: "vfsync::store",
                "Change for unknown document {}; ignoring",
                uri
            );
            return Ok(self.clone());
        };

        let text = apply_changes(file.text(), edits);
        let keep_snapshot = !self.options.invalidate_snapshot_on_change;
        let updated = file.with_text(version.unwrap_or(0), text, keep_snapshot);
        Ok(self.with_files(self.files.update(key, updated)))
    }

    /// Remove a document. Closing an unknown document does nothing.
    ///
    /// # Errors
    /// Fails without touching the store when `uri` has no valid key.
    pub fn close(&self, uri: &Uri) -> VfsResult<Vfs> {
        let key = self.key(uri)?;
        log::debug!("Closing {}", uri);
        Ok(self.with_files(self.files.without(&key)))
    }

    /// Path of a file holding the document's current text.
    ///
    /// The first call writes a temp file and records it; later calls return
    /// the recorded path.
    ///
    /// # Errors
    /// `DocumentNotFound` if `uri` is not open, `Io` if the write fails.
    pub fn persist_snapshot(&self, uri: &Uri) -> VfsResult<(PathBuf, Vfs)> {
        let key = self.key(uri)?;
        let file = self
            .files
            .get(&key)
            .ok_or_else(|| VfsError::document_not_found(uri.as_str()))?;

        if let Some(path) = file.snapshot_path() {
            return Ok((path.to_path_buf(), self.clone()));
        }

        let path = write_snapshot(
            uri,
            file.text(),
            self.options.snapshot_dir.as_deref(),
            self.options.target_os,
        )?;
        log::info!("Persisted {} to {}", uri, path.display());

        let updated = file.with_snapshot(path.clone());
        Ok((path, self.with_files(self.files.update(key, updated))))
    }

    /// Document whose recorded snapshot is `path`.
    pub fn snapshot_owner(&self, path: &Path) -> Option<Uri> {
        self.files
            .iter()
            .find(|(_, file)| file.snapshot_path() == Some(path))
            .map(|(key, _)| denormalize(key))
    }

    /// Replay a multi-document edit; see [`crate::workspace::replay_workspace_edit`].
    pub fn apply_workspace_edit(&self, edit: &WorkspaceEdit) -> VfsResult<Vfs> {
        crate::workspace::replay_workspace_edit(self, edit)
    }

    /// Route an inbound event to the matching transition.
    pub fn apply_event(&self, event: &VfsEvent) -> VfsResult<Vfs> {
        match event {
            VfsEvent::Open(params) => {
                let doc = &params.text_document;
                self.open(&doc.uri, doc.version, &doc.text)
            }
            VfsEvent::Change(params) => self.change(
                &params.text_document.uri,
                params.text_document.version,
                &params.content_changes,
            ),
            VfsEvent::Close(params) => self.close(&params.text_document.uri),
            VfsEvent::ApplyWorkspaceEdit(params) => self.apply_workspace_edit(&params.edit),
        }
    }

    fn with_files(&self, files: HashMap<NormalizedUri, VirtualFile>) -> Vfs {
        Vfs {
            files,
            options: self.options.clone(),
        }
    }
}
