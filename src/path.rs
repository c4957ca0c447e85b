//! Path manipulation utilities for spectr
//!
//! Artifact paths are always stored and compared in a normalized form:
//! forward slashes, no empty or `.` segments, `..` resolved where possible.
//! Normalization is purely lexical; nothing here touches the filesystem.

/// Normalize an artifact path to its canonical relative form.
///
/// Backslashes become forward slashes, duplicate and trailing slashes are
/// collapsed, `.` segments are dropped and `..` segments consume the
/// preceding segment. Unconsumable `..` segments are kept at the front so
/// callers can detect paths that climb out of their root.
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();

    for part in unified.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    parts.join("/")
}

/// Check whether a path is absolute (Unix or Windows style).
pub fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') || path.starts_with('\\') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic()
}

/// Check whether a path would resolve outside the root it is joined to.
///
/// True for absolute paths and for paths whose normalized form still begins
/// with a `..` segment.
pub fn escapes_root(path: &str) -> bool {
    if is_absolute(path) {
        return true;
    }
    let normalized = normalize(path);
    normalized == ".." || normalized.starts_with("../")
}
