//! Best-effort temp-file copies of document text.

use crate::error::VfsResult;
use crate::uri::{TargetOs, Uri, file_name, uri_to_file_path};
use ropey::Rope;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "untitled";

/// Write `text` to a new temp file and keep it on disk.
///
/// The file name reuses the document's stem and extension so tools that
/// dispatch on extension still recognize it. Files go to `dir` when given,
/// otherwise to the system temp directory.
pub(crate) fn write_snapshot(
    uri: &Uri,
    text: &Rope,
    dir: Option<&Path>,
    os: TargetOs,
) -> VfsResult<PathBuf> {
    let (stem, extension) = snapshot_name_parts(uri, os);
    let prefix = format!("{stem}-");
    let suffix = extension.map(|ext| format!(".{ext}")).unwrap_or_default();

    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(&suffix);
    let mut file = match dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        text.write_to(&mut writer)?;
        writer.flush()?;
    }

    let (_file, path) = file.keep().map_err(|err| err.error)?;
    Ok(path)
}

fn snapshot_name_parts(uri: &Uri, os: TargetOs) -> (String, Option<String>) {
    let path = uri_to_file_path(uri, os).ok().flatten();
    let Some(name) = path.as_deref().and_then(|path| file_name(path, os)) else {
        return (FALLBACK_STEM.to_string(), None);
    };

    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            (stem.to_string(), Some(ext.to_string()))
        }
        _ => (name.to_string(), None),
    }
}
