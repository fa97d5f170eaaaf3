//! Reveal an entry's file location in Explorer
//!
//! Entries can outlive their files, so a missing file falls back to the
//! closest ancestor directory that still exists.

use std::path::{Path, PathBuf};

/// Where Explorer should open for an entry path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealTarget {
    /// Open Explorer with the file itself selected
    SelectFile(PathBuf),
    /// Open Explorer at the nearest existing ancestor directory
    OpenFolder(PathBuf),
}

/// Resolve the reveal target for a (possibly stale) entry path.
///
/// The walk stops once the ancestor chain is exhausted, so a path whose
/// whole chain is gone resolves to `None` instead of looping.
pub fn resolve_reveal(path: &Path) -> Option<RevealTarget> {
    if path.is_file() {
        return Some(RevealTarget::SelectFile(path.to_path_buf()));
    }

    for ancestor in path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        if ancestor.is_dir() {
            return Some(RevealTarget::OpenFolder(ancestor.to_path_buf()));
        }
    }

    None
}

/// Launch Explorer for a resolved target.
#[cfg(windows)]
pub fn open_in_explorer(target: &RevealTarget) -> crate::error::Result<()> {
    use std::process::Command;

    match target {
        RevealTarget::SelectFile(file) => {
            Command::new("explorer.exe")
                .arg(format!("/select,{}", file.display()))
                .spawn()?;
        }
        RevealTarget::OpenFolder(dir) => {
            Command::new("explorer.exe").arg(dir.as_os_str()).spawn()?;
        }
    }

    Ok(())
}
