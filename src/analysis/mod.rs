//! Read-only queries over a single virtual file.

mod prefix;
mod range_text;

pub use prefix::{PrefixContext, extract_prefix};
pub use range_text::read_range;
