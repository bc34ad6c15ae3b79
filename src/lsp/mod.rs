//! Bridge from LSP wire types to vfsync's domain types.

mod convert;

pub use convert::workspace_edit_from_lsp;
