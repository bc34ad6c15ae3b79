use crate::analysis::{extract_prefix, read_range};
use crate::document::{Vfs, VirtualFile};
use crate::domain::{QueryReply, VfsQuery};
use crate::error::{VfsError, VfsResult};
use crate::uri::Uri;

fn open_file<'a>(vfs: &'a Vfs, uri: &Uri) -> VfsResult<&'a VirtualFile> {
    vfs.get(uri)
        .ok_or_else(|| VfsError::document_not_found(uri.as_str()))
}

/// Answer `query` against `vfs`, returning the reply and the next store.
///
/// Only snapshot persistence changes the store; every other query hands
/// back a clone of `vfs`.
pub fn answer_query(vfs: &Vfs, query: &VfsQuery) -> VfsResult<(QueryReply, Vfs)> {
    match query {
        VfsQuery::PersistSnapshot { uri } => {
            let (path, next) = vfs.persist_snapshot(uri)?;
            Ok((QueryReply::SnapshotPath(path), next))
        }
        VfsQuery::ExtractPrefix { uri, position } => {
            let context = extract_prefix(open_file(vfs, uri)?, *position);
            Ok((QueryReply::Prefix(context), vfs.clone()))
        }
        VfsQuery::ReadRange { uri, range } => {
            let text = read_range(open_file(vfs, uri)?, *range);
            Ok((QueryReply::Text(text), vfs.clone()))
        }
        VfsQuery::GetText { uri } => {
            let text = open_file(vfs, uri)?.text().to_string();
            Ok((QueryReply::Text(text), vfs.clone()))
        }
    }
}
