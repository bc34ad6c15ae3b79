//! Conversion between `file:` URIs and local filesystem paths.
//!
//! Paths are plain strings rather than `PathBuf` because the target
//! operating system is a parameter and may differ from the host.

use super::escape::{POSIX_SEGMENT, WINDOWS_SEGMENT};
use super::parse::UriParts;
use super::{TargetOs, Uri};
use crate::error::{VfsError, VfsResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode};

/// Scheme name (without the trailing colon) recognized as a local file.
pub const FILE_SCHEME: &str = "file";

/// Convert a `file:` URI into a path for `os`.
///
/// Returns `Ok(None)` when the URI cannot be parsed or is not a file URI.
/// The authority's host, if any, is decoded and put back in front of the
/// path: generic parsing absorbs the first segment of a relative path into it.
///
/// # Errors
/// `EmptyPathSegments` when a non-empty path yields no segments on Windows
/// (e.g. `file:///`).
pub fn uri_to_file_path(uri: &Uri, os: TargetOs) -> VfsResult<Option<String>> {
    let Some(parts) = UriParts::parse(uri.as_str()) else {
        return Ok(None);
    };
    if parts.scheme != FILE_SCHEME {
        return Ok(None);
    }

    let decoded = percent_decode_str(parts.path).decode_utf8_lossy();
    let path = match os {
        TargetOs::Windows => windows_path_from_uri_path(&decoded)?,
        TargetOs::Unix => decoded.into_owned(),
    };

    let authority = percent_decode_str(parts.reg_name().unwrap_or("")).decode_utf8_lossy();
    Ok(Some(format!("{authority}{path}")))
}

/// Convert a path for `os` into a `file://` URI with an empty authority.
///
/// Each segment is escaped on its own; Windows results are prefixed with
/// `/` so they read `file:///C:/...`.
pub fn file_path_to_uri(path: &str, os: TargetOs) -> Uri {
    let (drive, segments, set) = match os {
        TargetOs::Windows => {
            let (drive, segments) = split_windows_path(path);
            (uri_drive_from_windows(&drive), segments, WINDOWS_SEGMENT)
        }
        TargetOs::Unix => {
            let (drive, segments) = split_posix_path(path);
            (drive.to_string(), segments, POSIX_SEGMENT)
        }
    };

    let escaped = segments
        .iter()
        .map(|segment| utf8_percent_encode(segment, set).to_string())
        .collect::<Vec<_>>()
        .join("/");

    let joined = join_drive(&drive, &escaped, '/');
    let uri_path = if os.is_windows() {
        format!("/{joined}")
    } else {
        joined
    };

    Uri::new(format!("{FILE_SCHEME}://{uri_path}"))
}

/// Last path component for `os`, if any.
pub(crate) fn file_name(path: &str, os: TargetOs) -> Option<&str> {
    let name = match os {
        TargetOs::Windows => path.rsplit(is_windows_separator).next(),
        TargetOs::Unix => path.rsplit('/').next(),
    };
    name.filter(|name| !name.is_empty())
}

/// Windows form of a decoded URI path such as `/C:/src/Main.hs`.
///
/// A path that still starts with `/` after dropping the first one (e.g.
/// `//share/x`) is rooted at `\` rather than `/`; both name the current
/// drive's root on Windows.
fn windows_path_from_uri_path(src: &str) -> VfsResult<String> {
    if src.is_empty() {
        return Ok(String::new());
    }

    // Drop the leading '/' of "/C:/..."
    let mut chars = src.chars();
    chars.next();
    let trimmed = chars.as_str();

    let mut segments: Vec<&str> = Vec::new();
    if trimmed.starts_with('/') {
        segments.push("\\");
    }
    segments.extend(trimmed.split('/').filter(|segment| !segment.is_empty()));

    let Some((first, rest)) = segments.split_first() else {
        return Err(VfsError::empty_path_segments(src));
    };

    let drive = if is_drive_letter(first) {
        format!("{first}\\")
    } else {
        first.to_string()
    };

    Ok(join_drive(&drive, &rest.join("\\"), '\\'))
}

fn split_posix_path(path: &str) -> (&'static str, Vec<&str>) {
    let drive = if path.starts_with('/') { "/" } else { "" };
    let segments = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    (drive, segments)
}

/// Normalize a Windows path and split it into its drive and segments.
///
/// The drive keeps its trailing separator (`C:\`), drive letters are
/// upper-cased, and `/` counts as a separator.
fn split_windows_path(path: &str) -> (String, Vec<&str>) {
    let (drive, rest) = split_windows_drive(path);
    let segments = rest
        .split(is_windows_separator)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    (normalize_windows_drive(drive), segments)
}

fn split_windows_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();

    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let end = 2 + separator_run(&path[2..]);
        return path.split_at(end);
    }

    if starts_with_double_separator(path) {
        // UNC share: \\server\share\
        let mut separators_seen = 0;
        for (index, ch) in path.char_indices().skip(2) {
            if is_windows_separator(ch) {
                separators_seen += 1;
                if separators_seen == 2 {
                    return path.split_at(index + 1);
                }
            }
        }
        return (path, "");
    }

    let end = separator_run(path);
    path.split_at(end)
}

fn normalize_windows_drive(drive: &str) -> String {
    let bytes = drive.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let letter = (bytes[0] as char).to_ascii_uppercase();
        let separator = if drive.len() > 2 { "\\" } else { "" };
        return format!("{letter}:{separator}");
    }
    if starts_with_double_separator(drive) {
        return format!("\\\\{}", drive[2..].replace('/', "\\"));
    }
    if drive.is_empty() {
        String::new()
    } else {
        "\\".to_string()
    }
}

/// `C:\` becomes `C:/`; only the trailing separator is rewritten.
fn uri_drive_from_windows(drive: &str) -> String {
    match drive.strip_suffix('\\') {
        Some(stem) => format!("{stem}/"),
        None => drive.to_string(),
    }
}

fn join_drive(drive: &str, rest: &str, separator: char) -> String {
    if drive.is_empty() {
        return rest.to_string();
    }
    if rest.is_empty() || drive.ends_with(['/', '\\']) || is_drive_letter(drive) {
        return format!("{drive}{rest}");
    }
    format!("{drive}{separator}{rest}")
}

fn is_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn is_windows_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

fn starts_with_double_separator(path: &str) -> bool {
    path.chars().take(2).filter(|ch| is_windows_separator(*ch)).count() == 2
}

fn separator_run(path: &str) -> usize {
    path.chars()
        .take_while(|ch| is_windows_separator(*ch))
        .count()
}
