//! Conversions from `tower_lsp_server::ls_types` notification params.
//!
//! Only the text-synchronization subset is mapped. Resource operations
//! (create/rename/delete) inside a workspace edit have no counterpart in
//! the store and are dropped with a debug log.

use crate::domain::{
    ApplyEditParams, DidChangeParams, DidCloseParams, DidOpenParams, DocumentEdits, DocumentId,
    EditOperation, Position, Range, TextDocumentItem, TextEdit, VersionedDocumentId, WorkspaceEdit,
};
use crate::uri::Uri;
use std::collections::BTreeMap;
use tower_lsp_server::ls_types::{self, DocumentChangeOperation, DocumentChanges, OneOf};

fn uri_from_lsp(uri: &ls_types::Uri) -> Uri {
    Uri::new(uri.as_str())
}

impl From<ls_types::Position> for Position {
    fn from(position: ls_types::Position) -> Self {
        Position::new(position.line, position.character)
    }
}

impl From<ls_types::Range> for Range {
    fn from(range: ls_types::Range) -> Self {
        Range::new(range.start.into(), range.end.into())
    }
}

impl From<ls_types::TextDocumentContentChangeEvent> for EditOperation {
    fn from(change: ls_types::TextDocumentContentChangeEvent) -> Self {
        EditOperation {
            range: change.range.map(Range::from),
            range_length: change.range_length,
            text: change.text,
        }
    }
}

impl From<ls_types::TextEdit> for TextEdit {
    fn from(edit: ls_types::TextEdit) -> Self {
        TextEdit::new(edit.range.into(), edit.new_text)
    }
}

impl From<ls_types::DidOpenTextDocumentParams> for DidOpenParams {
    fn from(params: ls_types::DidOpenTextDocumentParams) -> Self {
        let document = params.text_document;
        DidOpenParams {
            text_document: TextDocumentItem {
                uri: uri_from_lsp(&document.uri),
                language_id: Some(document.language_id),
                version: document.version,
                text: document.text,
            },
        }
    }
}

impl From<ls_types::DidChangeTextDocumentParams> for DidChangeParams {
    fn from(params: ls_types::DidChangeTextDocumentParams) -> Self {
        DidChangeParams {
            text_document: VersionedDocumentId {
                uri: uri_from_lsp(&params.text_document.uri),
                version: Some(params.text_document.version),
            },
            content_changes: params
                .content_changes
                .into_iter()
                .map(EditOperation::from)
                .collect(),
        }
    }
}

impl From<ls_types::DidCloseTextDocumentParams> for DidCloseParams {
    fn from(params: ls_types::DidCloseTextDocumentParams) -> Self {
        DidCloseParams {
            text_document: DocumentId {
                uri: uri_from_lsp(&params.text_document.uri),
            },
        }
    }
}

impl From<ls_types::ApplyWorkspaceEditParams> for ApplyEditParams {
    fn from(params: ls_types::ApplyWorkspaceEditParams) -> Self {
        ApplyEditParams {
            label: params.label,
            edit: workspace_edit_from_lsp(params.edit),
        }
    }
}

fn document_edits_from_lsp(edit: ls_types::TextDocumentEdit) -> DocumentEdits {
    DocumentEdits {
        text_document: VersionedDocumentId {
            uri: uri_from_lsp(&edit.text_document.uri),
            version: edit.text_document.version,
        },
        edits: edit
            .edits
            .into_iter()
            .map(|edit| match edit {
                OneOf::Left(text_edit) => text_edit.into(),
                OneOf::Right(annotated) => annotated.text_edit.into(),
            })
            .collect(),
    }
}

/// Convert an LSP workspace edit, keeping both of its edit forms.
pub fn workspace_edit_from_lsp(edit: ls_types::WorkspaceEdit) -> WorkspaceEdit {
    let changes = edit.changes.map(|changes| {
        changes
            .into_iter()
            .map(|(uri, edits)| {
                let edits = edits.into_iter().map(TextEdit::from).collect();
                (uri_from_lsp(&uri), edits)
            })
            .collect::<BTreeMap<_, _>>()
    });

    let document_changes = edit.document_changes.map(|document_changes| match document_changes {
        DocumentChanges::Edits(edits) => edits.into_iter().map(document_edits_from_lsp).collect(),
        DocumentChanges::Operations(operations) => operations
            .into_iter()
            .filter_map(|operation| match operation {
                DocumentChangeOperation::Edit(edit) => Some(document_edits_from_lsp(edit)),
                DocumentChangeOperation::Op(op) => {
                    log::debug!(
                        target: "vfsync::lsp",
                        "Ignoring resource operation in workspace edit: {:?}",
                        op
                    );
                    None
                }
            })
            .collect(),
    });

    WorkspaceEdit {
        changes,
        document_changes,
    }
}
