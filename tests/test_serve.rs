// JSON-lines serve loop driven end to end through the actor.

use serde_json::{Value, json};
use tempfile::TempDir;
use vfsync::{TargetOs, Uri, Vfs, VfsHandle, VfsOptions, serve};

fn line(value: Value) -> String {
    format!("{}\n", value)
}

async fn run(options: VfsOptions, input: String) -> (Vec<Value>, Vfs) {
    let (handle, join) = VfsHandle::spawn(Vfs::new(options));
    let mut output = Vec::new();
    serve(&handle, input.as_bytes(), &mut output)
        .await
        .expect("serve should finish at end of input");
    drop(handle);
    let store = join.await.expect("actor task panicked");

    let replies = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (replies, store)
}

#[tokio::test]
async fn test_workspace_edit_then_read_back() {
    let uri = "file:///w/Main.hs";
    let input = [
        line(json!({
            "method": "textDocument/didOpen",
            "params": {"textDocument": {"uri": uri, "version": 1, "text": "abcdefgh"}}
        })),
        line(json!({
            "method": "workspace/applyEdit",
            "params": {"edit": {"documentChanges": [{
                "textDocument": {"uri": uri, "version": 2},
                "edits": [
                    {"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 2}}, "newText": "XYZ"},
                    {"range": {"start": {"line": 0, "character": 5}, "end": {"line": 0, "character": 7}}, "newText": ""}
                ]
            }]}}
        })),
        line(json!({"id": 1, "method": "vfs/getText", "params": {"uri": uri}})),
    ]
    .concat();

    let (replies, store) = run(VfsOptions::new(TargetOs::Unix), input).await;

    assert_eq!(replies, vec![json!({"id": 1, "result": "XYZcdeh"})]);
    assert_eq!(store.get(&Uri::new(uri)).unwrap().version(), 2);
}

#[tokio::test]
async fn test_persist_snapshot_reply_is_a_path() {
    let dir = TempDir::new().unwrap();
    let mut options = VfsOptions::new(TargetOs::Unix);
    options.snapshot_dir = Some(dir.path().to_path_buf());

    let uri = "file:///w/Lib.hs";
    let input = [
        line(json!({
            "method": "textDocument/didOpen",
            "params": {"textDocument": {"uri": uri, "version": 1, "text": "module Lib where\n"}}
        })),
        line(json!({"id": "snap", "method": "vfs/persistSnapshot", "params": {"uri": uri}})),
        line(json!({
            "id": "lines",
            "method": "vfs/readRange",
            "params": {"uri": uri, "range": {"start": {"line": 0, "character": 0}, "end": {"line": 1, "character": 0}}}
        })),
    ]
    .concat();

    let (replies, store) = run(options, input).await;

    let path = replies[0]["result"].as_str().unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "module Lib where\n");
    assert_eq!(
        store.snapshot_owner(std::path::Path::new(path)),
        Some(Uri::new(uri))
    );
    assert_eq!(replies[1], json!({"id": "lines", "result": "module Lib where\n"}));
}

#[tokio::test]
async fn test_queries_after_close_report_errors() {
    let uri = "file:///w/Gone.hs";
    let input = [
        line(json!({
            "method": "textDocument/didOpen",
            "params": {"textDocument": {"uri": uri, "version": 1, "text": "x"}}
        })),
        line(json!({"method": "textDocument/didClose", "params": {"textDocument": {"uri": uri}}})),
        line(json!({"id": 3, "method": "vfs/persistSnapshot", "params": {"uri": uri}})),
    ]
    .concat();

    let (replies, store) = run(VfsOptions::new(TargetOs::Unix), input).await;

    assert!(store.is_empty());
    assert_eq!(replies[0]["id"], 3);
    assert!(
        replies[0]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Document not found")
    );
}
