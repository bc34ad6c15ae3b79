//! vfsync: an in-memory mirror of a language client's open documents.
//!
//! Documents are keyed by normalized URI and kept as ropes, patched with
//! UTF-16 ranged edits, and can be flushed to temp files for external tools.

pub mod analysis;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod lsp;
pub mod runtime;
pub mod text;
pub mod uri;
pub mod workspace;

pub use analysis::{PrefixContext, extract_prefix, read_range};
pub use config::{VfsSettings, load_settings};
pub use document::{Vfs, VfsOptions, VirtualFile};
pub use domain::{EditOperation, Position, Range, VfsEvent, VfsQuery, WorkspaceEdit};
pub use error::{VfsError, VfsResult};
pub use runtime::{VfsHandle, serve};
pub use uri::{
    NormalizedUri, TargetOs, Uri, denormalize, file_path_to_uri, normalize, uri_to_file_path,
};
