mod replay;

pub use replay::{replay_workspace_edit, workspace_edit_to_changes};
