//! Atomic file commit for downloaded images.
//!
//! The body is written to a `.part` sibling first and renamed into place,
//! so the destination path is never observable half-written. A failed
//! write may leave the `.part` file behind; the destination stays absent.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `804-004.jpg` → `804-004.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Writes `data` to `final_path` atomically, creating parent directories
/// as needed.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = final_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(final_path);
    let mut f = fs::File::create(&tmp)?;
    f.write_all(data)?;
    f.flush()?;
    drop(f);
    fs::rename(&tmp, final_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("804-004.jpg"));
        assert_eq!(p.to_string_lossy(), "804-004.jpg.part");
        let p2 = temp_path(Path::new("/tmp/a/b.jpg"));
        assert_eq!(p2.to_string_lossy(), "/tmp/a/b.jpg.part");
    }

    #[test]
    fn write_atomic_creates_parents_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("coll").join("sub").join("804-004.jpg");
        write_atomic(&dest, b"bytes").unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"bytes");
        assert!(!temp_path(&dest).exists());
    }

    #[test]
    fn write_atomic_replaces_nothing_on_parent_failure() {
        let dir = tempfile::tempdir().unwrap();
        // Parent path occupied by a regular file: create_dir_all fails,
        // destination must not appear.
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"x").unwrap();
        let dest = blocker.join("804-004.jpg");
        assert!(write_atomic(&dest, b"bytes").is_err());
        assert!(!dest.exists());
    }
}
