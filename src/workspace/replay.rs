//! Replay of multi-document workspace edits.
//!
//! A workspace edit expresses every edit of a document in that document's
//! original coordinates. Applying a document's edits bottom-up keeps those
//! coordinates valid without translating them, so each batch becomes one
//! ordinary change event.

use crate::document::Vfs;
use crate::error::VfsResult;
use crate::domain::{
    DidChangeParams, DocumentEdits, EditOperation, TextEdit, VersionedDocumentId, WorkspaceEdit,
};

/// Turn `edit` into per-document change events in replay order.
///
/// Batches are ordered by ascending version (absent versions count as 0);
/// the edits inside a batch are ordered latest-starting first.
/// `document_changes` takes precedence over `changes` when both are set.
pub fn workspace_edit_to_changes(edit: &WorkspaceEdit) -> Vec<DidChangeParams> {
    let mut batches: Vec<DocumentEdits> = match (&edit.document_changes, &edit.changes) {
        (Some(document_changes), _) => document_changes.clone(),
        (None, Some(changes)) => changes
            .iter()
            .map(|(uri, edits)| DocumentEdits {
                text_document: VersionedDocumentId {
                    uri: uri.clone(),
                    version: Some(0),
                },
                edits: edits.clone(),
            })
            .collect(),
        (None, None) => Vec::new(),
    };

    batches.sort_by_key(|batch| batch.text_document.version.unwrap_or(0));

    batches
        .into_iter()
        .map(|batch| DidChangeParams {
            content_changes: bottom_up(batch.edits),
            text_document: batch.text_document,
        })
        .collect()
}

/// Apply `edit` to `vfs` through ordinary change events.
///
/// An edit carrying neither form is logged and leaves the store as is.
///
/// # Errors
/// The first change whose URI has no valid key aborts the replay; none of
/// the edit is applied.
pub fn replay_workspace_edit(vfs: &Vfs, edit: &WorkspaceEdit) -> VfsResult<Vfs> {
    if edit.changes.is_none() && edit.document_changes.is_none() {
        log::warn!(
            target: "vfsync::workspace",
            "Workspace edit has neither changes nor documentChanges; nothing to apply"
        );
        return Ok(vfs.clone());
    }

    workspace_edit_to_changes(edit)
        .into_iter()
        .try_fold(vfs.clone(), |vfs, change| {
            log::debug!(
                "Replaying {} edit(s) on {}",
                change.content_changes.len(),
                change.text_document.uri
            );
            vfs.change(
                &change.text_document.uri,
                change.text_document.version,
                &change.content_changes,
            )
        })
}

fn bottom_up(mut edits: Vec<TextEdit>) -> Vec<EditOperation> {
    edits.sort_by(|a, b| b.range.cmp(&a.range));
    edits
        .into_iter()
        .map(|edit| EditOperation::ranged(edit.range, edit.new_text))
        .collect()
}
