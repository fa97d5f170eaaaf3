//! Associated-icon extraction for list entries
//!
//! Wraps `SHGetFileInfoW`. Extraction failure degrades to the generic
//! executable icon; icon trouble is never surfaced to the user.

use std::path::Path;

use widestring::U16CString;
use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::{FILE_ATTRIBUTE_NORMAL, FILE_FLAGS_AND_ATTRIBUTES};
use windows::Win32::UI::Shell::{
    SHGetFileInfoW, SHFILEINFOW, SHGFI_ICON, SHGFI_SMALLICON, SHGFI_USEFILEATTRIBUTES,
};
use windows::Win32::UI::WindowsAndMessaging::{DestroyIcon, HICON};

/// Small icon associated with `path`, or `None` when extraction fails.
pub fn associated_icon(path: &Path) -> Option<HICON> {
    let wide = U16CString::from_os_str(path.as_os_str()).ok()?;
    let mut info = SHFILEINFOW::default();

    // UNAVOIDABLE UNSAFE: SHGetFileInfoW is a shell32 FFI call.
    // The wide string is null-terminated and outlives the call, and the
    // out structure is stack-owned.
    let result = unsafe {
        SHGetFileInfoW(
            PCWSTR(wide.as_ptr()),
            FILE_FLAGS_AND_ATTRIBUTES(0),
            Some(&mut info),
            std::mem::size_of::<SHFILEINFOW>() as u32,
            SHGFI_ICON | SHGFI_SMALLICON,
        )
    };

    if result != 0 && !info.hIcon.is_invalid() {
        Some(info.hIcon)
    } else {
        None
    }
}

/// Generic executable icon used when per-path extraction fails.
///
/// SHGFI_USEFILEATTRIBUTES makes the shell answer for the ".exe" class
/// without touching the filesystem.
pub fn fallback_icon() -> Option<HICON> {
    let wide = U16CString::from_str(".exe").ok()?;
    let mut info = SHFILEINFOW::default();

    // UNAVOIDABLE UNSAFE: same FFI contract as associated_icon
    let result = unsafe {
        SHGetFileInfoW(
            PCWSTR(wide.as_ptr()),
            FILE_ATTRIBUTE_NORMAL,
            Some(&mut info),
            std::mem::size_of::<SHFILEINFOW>() as u32,
            SHGFI_ICON | SHGFI_SMALLICON | SHGFI_USEFILEATTRIBUTES,
        )
    };

    if result != 0 && !info.hIcon.is_invalid() {
        Some(info.hIcon)
    } else {
        None
    }
}

/// Release an icon handed out by this module once the image list owns a
/// copy of it.
pub fn destroy(icon: HICON) {
    // UNAVOIDABLE UNSAFE: DestroyIcon is a user32 FFI call on a handle we
    // own; double-destroy is prevented by consuming the handle here
    unsafe {
        let _ = DestroyIcon(icon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_icon_does_not_crash() {
        // The shell may decline in stripped-down sessions; just verify the
        // call and the cleanup path
        if let Some(icon) = fallback_icon() {
            destroy(icon);
        }
    }

    #[test]
    fn test_missing_file_yields_no_icon_or_shell_default() {
        let result = associated_icon(Path::new(r"C:\flickuac_test\missing.exe"));
        if let Some(icon) = result {
            destroy(icon);
        }
    }
}
