//! Recovery of the on-disk case of a path.

use std::ffi::{OsStr, OsString};
use std::path::{is_separator, Path, PathBuf};

use super::fs::FileSystem;

/// Rebuilds `path` with every segment spelled the way its parent directory
/// lists it.
///
/// The walk starts at the root and descends one segment at a time, so it
/// is bounded by the number of segments. Only spellings change: separators,
/// `.` segments and doubled separators come back exactly as given, as do
/// roots, prefixes and a leading relative segment. A segment that cannot be
/// found in its parent's listing, or whose parent cannot be listed, keeps
/// its input spelling. Symlinked directories are not followed: the link's own
/// name is what the parent lists. A path that is not valid UTF-8 is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use repath::pathlist::{recover_case, MemoryFileSystem};
/// use std::path::{Path, PathBuf};
///
/// let fs = MemoryFileSystem::new().with_dir("/Users/Ada/Tools");
/// assert_eq!(
///     recover_case(&fs, Path::new("/users/ADA/tools")),
///     PathBuf::from("/Users/Ada/Tools")
/// );
/// # }
/// ```
pub fn recover_case(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };

    let mut rebuilt = String::with_capacity(raw.len());
    let mut parent = PathBuf::new();

    for piece in raw.split_inclusive(is_separator) {
        let name = piece.trim_end_matches(is_separator);
        let separator = &piece[name.len()..];

        if parent.as_os_str().is_empty() {
            // Root, drive prefix or leading relative segment.
            rebuilt.push_str(piece);
            parent.push(piece);
            continue;
        }
        if name.is_empty() || name == "." {
            rebuilt.push_str(piece);
            continue;
        }

        let stored = stored_name(fs, &parent, OsStr::new(name));
        let spelled = stored
            .as_deref()
            .and_then(OsStr::to_str)
            .unwrap_or(name);
        rebuilt.push_str(spelled);
        rebuilt.push_str(separator);
        parent.push(spelled);
    }

    PathBuf::from(rebuilt)
}

/// Looks `name` up in the listing of `parent`, preferring an exact match.
fn stored_name(fs: &dyn FileSystem, parent: &Path, name: &OsStr) -> Option<OsString> {
    let children = fs.child_dir_names(parent).ok()?;

    if children.iter().any(|child| child == name) {
        return Some(name.to_os_string());
    }

    let wanted = name.to_string_lossy().to_lowercase();
    children
        .into_iter()
        .find(|child| child.to_string_lossy().to_lowercase() == wanted)
}
