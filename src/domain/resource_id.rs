//! Resource identifier handling shared by the concrete resolvers.
//!
//! The accessor facade treats identifiers as opaque strings. Resolvers that map
//! identifiers onto a tree (a directory on disk, an embedded bundle) need them
//! as root-relative paths; this module performs that mapping.

use std::path::PathBuf;

/// Split an identifier into root-relative path segments.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment.
/// Returns `None` for identifiers that are absolute or would climb above the
/// root; such identifiers never resolve. On Windows a segment holding a backslash
/// or `:` could re-root the joined path, so those are rejected there too.
pub fn relative_segments(id: &str) -> Option<Vec<&str>> {
    if id.starts_with('/') || id.starts_with('\\') {
        return None;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in id.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s if cfg!(windows) && (s.contains('\\') || s.contains(':')) => return None,
            s => segments.push(s),
        }
    }
    Some(segments)
}

/// Root-relative path for an identifier (empty path names the root itself).
pub fn relative_path(id: &str) -> Option<PathBuf> {
    relative_segments(id).map(|segments| segments.iter().collect())
}

/// Identifier normalized to `a/b/c` form, as used for embedded lookups.
pub fn normalized(id: &str) -> Option<String> {
    relative_segments(id).map(|segments| segments.join("/"))
}
