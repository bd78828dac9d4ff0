//! Skill tree serialization.
//!
//! Walks a skill directory and collects every regular file as a
//! `(relative path, content)` pair. The walk is depth-first with entries
//! sorted by file name inside each directory, which yields the same order
//! as sorting the relative paths component by component.
//!
//! # Skip-on-decode-failure
//!
//! A file whose bytes are not valid UTF-8 cannot be represented in the
//! JSON `files` column. Such files are left out of [`SerializedTree::files`]
//! and listed in [`SerializedTree::skipped`] instead. This is the only
//! reason a readable file is ever omitted.

use seed_core::{Result, SeedError, SkillFile};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Result of serializing one directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializedTree {
    /// Decodable files in sorted path order.
    pub files: Vec<SkillFile>,

    /// Relative paths of files omitted because they are not UTF-8.
    pub skipped: Vec<String>,
}

/// Applies the skip-on-decode-failure rule to raw file bytes.
///
/// Returns `None` when the bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use seed_compiler::decode_text;
///
/// assert_eq!(decode_text(b"echo ok".to_vec()).as_deref(), Some("echo ok"));
/// assert!(decode_text(vec![0xff, 0xfe, 0x00]).is_none());
/// ```
#[must_use]
pub fn decode_text(bytes: Vec<u8>) -> Option<String> {
    String::from_utf8(bytes).ok()
}

/// Serializes every regular file under `root`.
///
/// A symlink to a regular file is read through the link and listed under
/// the link's own path. Symlinked directories are not descended into and
/// directories contribute no entries of their own. Relative paths always
/// use `/` as the separator.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if a directory cannot be listed or a file
/// cannot be read. Undecodable content is never an error.
///
/// # Examples
///
/// ```no_run
/// use seed_compiler::serialize_tree;
/// use std::path::Path;
///
/// let tree = serialize_tree(Path::new(".claude/skills/release-manager"))?;
/// for file in &tree.files {
///     println!("{}", file.path);
/// }
/// # Ok::<(), seed_core::SeedError>(())
/// ```
pub fn serialize_tree(root: &Path) -> Result<SerializedTree> {
    let mut tree = SerializedTree::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SeedError::io(path, e.into())
        })?;

        if !is_regular_file(&entry) {
            continue;
        }

        let file_path = entry.path();
        let relative_path = relative_path(root, file_path);

        let bytes = fs::read(file_path).map_err(|e| SeedError::io(file_path, e))?;

        match decode_text(bytes) {
            Some(content) => tree.files.push(SkillFile {
                path: relative_path,
                content,
            }),
            None => {
                tracing::debug!("Skipping non-UTF-8 file: {}", file_path.display());
                tree.skipped.push(relative_path);
            }
        }
    }

    Ok(tree)
}

/// Regular files, including symlinks that resolve to one.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Path of `file` relative to `root`, normalized to forward slashes.
fn relative_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
