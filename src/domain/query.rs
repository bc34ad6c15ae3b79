use crate::analysis::PrefixContext;
use crate::domain::position::{Position, Range};
use crate::uri::Uri;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Read-side requests answered from the current store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VfsQuery {
    PersistSnapshot { uri: Uri },
    ExtractPrefix { uri: Uri, position: Position },
    ReadRange { uri: Uri, range: Range },
    GetText { uri: Uri },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct UriParams {
    pub uri: Uri,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct PositionParams {
    pub uri: Uri,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct RangeParams {
    pub uri: Uri,
    pub range: Range,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryReply {
    SnapshotPath(PathBuf),
    Prefix(PrefixContext),
    Text(String),
}
