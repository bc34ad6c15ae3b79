//! Inbound document-synchronization events.
//!
//! These mirror the field sets of the LSP text-synchronization
//! notifications. Framing and method routing live in `runtime::message`.

use crate::domain::position::Range;
use crate::domain::workspace_edit::{VersionedDocumentId, WorkspaceEdit};
use crate::uri::Uri;
use serde::{Deserialize, Serialize};

/// One incremental change from the editor.
///
/// - no range, no length: the text replaces the whole document
/// - range: the text replaces the range
/// - range and length: the text replaces `range_length` code units from
///   the range start
/// - length only: ignored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,
    pub text: String,
}

impl EditOperation {
    /// Whole-document replacement.
    pub fn full(text: impl Into<String>) -> Self {
        Self {
            range: None,
            range_length: None,
            text: text.into(),
        }
    }

    /// Replacement of `range`.
    pub fn ranged(range: Range, text: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            range_length: None,
            text: text.into(),
        }
    }

    /// Legacy replacement anchored at `range.start` spanning `length` code units.
    pub fn with_length(range: Range, length: u32, text: impl Into<String>) -> Self {
        Self {
            range: Some(range),
            range_length: Some(length),
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: Uri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    pub version: i32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentId {
    pub uri: Uri,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenParams {
    pub text_document: TextDocumentItem,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeParams {
    pub text_document: VersionedDocumentId,
    pub content_changes: Vec<EditOperation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseParams {
    pub text_document: DocumentId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyEditParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub edit: WorkspaceEdit,
}

/// A state transition request for the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VfsEvent {
    Open(DidOpenParams),
    Change(DidChangeParams),
    Close(DidCloseParams),
    ApplyWorkspaceEdit(ApplyEditParams),
}

impl VfsEvent {
    pub fn uri(&self) -> Option<&Uri> {
        match self {
            VfsEvent::Open(params) => Some(&params.text_document.uri),
            VfsEvent::Change(params) => Some(&params.text_document.uri),
            VfsEvent::Close(params) => Some(&params.text_document.uri),
            VfsEvent::ApplyWorkspaceEdit(_) => None,
        }
    }
}
