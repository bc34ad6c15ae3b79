pub mod events;
pub mod position;
pub mod query;
pub mod workspace_edit;

pub use events::{
    ApplyEditParams, DidChangeParams, DidCloseParams, DidOpenParams, DocumentId, EditOperation,
    TextDocumentItem, VfsEvent,
};
pub use position::{Position, Range};
pub use query::{QueryReply, VfsQuery};
pub use workspace_edit::{DocumentEdits, TextEdit, VersionedDocumentId, WorkspaceEdit};
