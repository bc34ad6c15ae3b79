use super::escape::{UNRESERVED_ONLY, URI_UNSAFE};
use super::path::{file_path_to_uri, uri_to_file_path};
use super::{NormalizedUri, TargetOs, Uri};
use crate::error::VfsResult;
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// Canonical store key for `uri`.
///
/// File URIs are first round-tripped through a path for `os`, collapsing
/// spellings such as `file:///c%3A/x` and `file:///C:/x`. The result is then
/// percent-decoded and re-encoded so that only unreserved characters remain
/// literal. Normalizing a normalized value yields the same value.
///
/// # Errors
/// Whatever [`uri_to_file_path`] rejects, e.g. `EmptyPathSegments` for
/// `file:///` on Windows.
pub fn normalize(uri: &Uri, os: TargetOs) -> VfsResult<NormalizedUri> {
    let canonical = match uri_to_file_path(uri, os)? {
        Some(path) => file_path_to_uri(&path, os),
        None => uri.clone(),
    };

    let decoded = percent_decode_str(canonical.as_str()).decode_utf8_lossy();
    Ok(NormalizedUri(
        utf8_percent_encode(&decoded, UNRESERVED_ONLY).to_string(),
    ))
}

/// Recover a usable [`Uri`] from a normalized key.
///
/// Escapes are decoded and only characters that cannot appear literally in
/// a URI are re-escaped, so the result equals the original up to escaping.
pub fn denormalize(uri: &NormalizedUri) -> Uri {
    let decoded = percent_decode_str(uri.as_str()).decode_utf8_lossy();
    Uri::new(utf8_percent_encode(&decoded, URI_UNSAFE).to_string())
}
