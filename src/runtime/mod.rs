//! Single-owner runtime around the persistent store.
//!
//! A single actor task owns the current [`crate::Vfs`] and applies
//! commands in arrival order; [`VfsHandle`]s are cheap to clone and talk to
//! it over a bounded channel. [`serve`] drives a handle from a JSON-lines
//! stream.

mod actor;
mod message;
mod query;
mod serve;

pub use actor::{COMMAND_QUEUE_CAPACITY, VfsHandle};
pub use message::{Inbound, parse_inbound};
pub use query::answer_query;
pub use serve::serve;
