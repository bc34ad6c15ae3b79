pub mod store;

pub(crate) mod model;
mod snapshot;

// Re-export main types
pub use model::VirtualFile;
pub use store::{Vfs, VfsOptions};
