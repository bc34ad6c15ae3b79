// Replaying multi-document workspace edits against the store.

use std::collections::BTreeMap;
use vfsync::domain::{DocumentEdits, TextEdit, VersionedDocumentId};
use vfsync::workspace::{replay_workspace_edit, workspace_edit_to_changes};
use vfsync::{Position, Range, TargetOs, Uri, Vfs, VfsOptions, WorkspaceEdit};

fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
    Range::new(Position::new(sl, sc), Position::new(el, ec))
}

fn open(uri: &str, text: &str) -> Vfs {
    Vfs::new(VfsOptions::new(TargetOs::Unix))
        .open(&Uri::new(uri), 1, text)
        .unwrap()
}

fn text_of(vfs: &Vfs, uri: &str) -> String {
    vfs.get(&Uri::new(uri)).unwrap().text().to_string()
}

#[test]
fn edits_in_ascending_order_do_not_drift() {
    let vfs = open("file:///a.hs", "abcdefgh");

    let mut changes = BTreeMap::new();
    changes.insert(
        Uri::new("file:///a.hs"),
        vec![
            TextEdit::new(range(0, 0, 0, 2), "XYZ"),
            TextEdit::new(range(0, 5, 0, 7), ""),
        ],
    );
    let edit = WorkspaceEdit {
        changes: Some(changes),
        document_changes: None,
    };

    let next = replay_workspace_edit(&vfs, &edit).unwrap();
    assert_eq!(text_of(&next, "file:///a.hs"), "XYZcdeh");
}

#[test]
fn multi_line_edits_apply_bottom_up() {
    let vfs = open("file:///m.hs", "one\ntwo\nthree\n");

    let edit = WorkspaceEdit {
        changes: None,
        document_changes: Some(vec![DocumentEdits {
            text_document: VersionedDocumentId {
                uri: Uri::new("file:///m.hs"),
                version: Some(3),
            },
            edits: vec![
                TextEdit::new(range(0, 0, 0, 3), "1"),
                TextEdit::new(range(1, 0, 2, 0), ""),
                TextEdit::new(range(2, 5, 2, 5), "!"),
            ],
        }]),
    };

    let next = replay_workspace_edit(&vfs, &edit).unwrap();
    assert_eq!(text_of(&next, "file:///m.hs"), "1\nthree!\n");
    assert_eq!(next.get(&Uri::new("file:///m.hs")).unwrap().version(), 3);
}

#[test]
fn document_changes_are_replayed_by_version() {
    let edit = WorkspaceEdit {
        changes: None,
        document_changes: Some(vec![
            DocumentEdits {
                text_document: VersionedDocumentId {
                    uri: Uri::new("file:///b.hs"),
                    version: Some(9),
                },
                edits: vec![TextEdit::new(range(0, 0, 0, 0), "late")],
            },
            DocumentEdits {
                text_document: VersionedDocumentId {
                    uri: Uri::new("file:///a.hs"),
                    version: Some(2),
                },
                edits: vec![TextEdit::new(range(0, 0, 0, 0), "early")],
            },
        ]),
    };

    let batches = workspace_edit_to_changes(&edit);
    let versions: Vec<_> = batches
        .iter()
        .map(|batch| batch.text_document.version)
        .collect();
    assert_eq!(versions, vec![Some(2), Some(9)]);
}

#[test]
fn edits_for_unopened_documents_are_skipped() {
    let vfs = open("file:///a.hs", "a");

    let mut changes = BTreeMap::new();
    changes.insert(
        Uri::new("file:///a.hs"),
        vec![TextEdit::new(range(0, 1, 0, 1), "b")],
    );
    changes.insert(
        Uri::new("file:///ghost.hs"),
        vec![TextEdit::new(range(0, 0, 0, 0), "boo")],
    );
    let next = replay_workspace_edit(
        &vfs,
        &WorkspaceEdit {
            changes: Some(changes),
            document_changes: None,
        },
    )
    .unwrap();

    assert_eq!(text_of(&next, "file:///a.hs"), "ab");
    assert!(!next.contains(&Uri::new("file:///ghost.hs")));
}

#[test]
fn empty_workspace_edit_is_a_no_op() {
    let vfs = open("file:///a.hs", "a");
    assert_eq!(
        replay_workspace_edit(&vfs, &WorkspaceEdit::default()).unwrap(),
        vfs
    );
}
