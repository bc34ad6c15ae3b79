//! Inbound JSON-lines messages.
//!
//! Each line is an object `{ "id"?, "method", "params" }`. Notifications
//! (no reply) carry the LSP method names; queries use the `vfs/` prefix
//! and must carry an `id`.

use crate::domain::query::{PositionParams, RangeParams, UriParams};
use crate::domain::{ApplyEditParams, VfsEvent, VfsQuery};
use crate::error::{VfsError, VfsResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const DID_OPEN: &str = "textDocument/didOpen";
pub const DID_CHANGE: &str = "textDocument/didChange";
pub const DID_CLOSE: &str = "textDocument/didClose";
pub const APPLY_EDIT: &str = "workspace/applyEdit";
pub const PERSIST_SNAPSHOT: &str = "vfs/persistSnapshot";
pub const EXTRACT_PREFIX: &str = "vfs/extractPrefix";
pub const READ_RANGE: &str = "vfs/readRange";
pub const GET_TEXT: &str = "vfs/getText";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// A parsed inbound line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    Event(VfsEvent),
    Query { id: Value, query: VfsQuery },
}

fn params<T: DeserializeOwned>(method: &str, value: Value) -> VfsResult<T> {
    serde_json::from_value(value)
        .map_err(|err| VfsError::protocol(format!("invalid params for {}: {}", method, err)))
}

fn query(id: Option<Value>, method: &str, query: VfsQuery) -> VfsResult<Inbound> {
    let id = id.ok_or_else(|| VfsError::protocol(format!("{} requires an id", method)))?;
    Ok(Inbound::Query { id, query })
}

/// Parse one JSON line into an event or a query.
pub fn parse_inbound(line: &str) -> VfsResult<Inbound> {
    let Envelope { id, method, params: raw } = serde_json::from_str(line)?;
    let method = method.as_str();

    match method {
        DID_OPEN => Ok(Inbound::Event(VfsEvent::Open(params(method, raw)?))),
        DID_CHANGE => Ok(Inbound::Event(VfsEvent::Change(params(method, raw)?))),
        DID_CLOSE => Ok(Inbound::Event(VfsEvent::Close(params(method, raw)?))),
        APPLY_EDIT => {
            let edit: ApplyEditParams = params(method, raw)?;
            Ok(Inbound::Event(VfsEvent::ApplyWorkspaceEdit(edit)))
        }
        PERSIST_SNAPSHOT => {
            let UriParams { uri } = params(method, raw)?;
            query(id, method, VfsQuery::PersistSnapshot { uri })
        }
        EXTRACT_PREFIX => {
            let PositionParams { uri, position } = params(method, raw)?;
            query(id, method, VfsQuery::ExtractPrefix { uri, position })
        }
        READ_RANGE => {
            let RangeParams { uri, range } = params(method, raw)?;
            query(id, method, VfsQuery::ReadRange { uri, range })
        }
        GET_TEXT => {
            let UriParams { uri } = params(method, raw)?;
            query(id, method, VfsQuery::GetText { uri })
        }
        other => Err(VfsError::protocol(format!("unknown method: {}", other))),
    }
}
