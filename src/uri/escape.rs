use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `- _ . ~` is escaped.
pub(super) const UNRESERVED_ONLY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path segment escaping on POSIX targets.
pub(super) const POSIX_SEGMENT: &AsciiSet = &UNRESERVED_ONLY.remove(b'/');

/// Path segment escaping on Windows targets.
pub(super) const WINDOWS_SEGMENT: &AsciiSet = &POSIX_SEGMENT.remove(b':').remove(b'\\');

/// Characters that may never appear literally in a URI.
pub(super) const URI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');
