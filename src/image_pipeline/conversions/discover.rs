use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};

const FILE_PREFIX: &str = "_testimage";
const FILE_SUFFIX: &str = ".rgba";

/// Whether a file name looks like `_testimage*.rgba`.
pub fn is_test_image(file_name: &str) -> bool {
    file_name.len() >= FILE_PREFIX.len() + FILE_SUFFIX.len()
        && file_name.starts_with(FILE_PREFIX)
        && file_name.ends_with(FILE_SUFFIX)
}

pub fn sidecar_path_for(buffer_path: &Path) -> PathBuf {
    buffer_path.with_extension("txt")
}

pub fn output_path_for(buffer_path: &Path, dest_root: &Path) -> Option<PathBuf> {
    let stem = buffer_path.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(".jpg");
    Some(dest_root.join(name))
}

/// Recursively collects buffer files under `root`, in sorted order.
///
/// Only an unreadable `root` is an error. Unreadable subdirectories are
/// logged and left out. Symlinked directories are not entered.
pub fn find_test_images(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root).map_err(|source| ConversionError::SourceRootUnavailable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    let mut pending = vec![collect_sorted(entries)];

    while let Some(mut level) = pending.pop() {
        while let Some((path, is_dir)) = level.pop() {
            if is_dir {
                match std::fs::read_dir(&path) {
                    Ok(entries) => {
                        pending.push(level);
                        level = collect_sorted(entries);
                    }
                    Err(e) => warn!("Skipping unreadable directory {}: {}", path.display(), e),
                }
                continue;
            }

            let matches = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_test_image);
            if matches {
                debug!("Found buffer file {}", path.display());
                found.push(path);
            }
        }
    }

    Ok(found)
}

/// Entries paired with whether they are real directories, reversed so
/// popping yields them in ascending order.
fn collect_sorted(entries: std::fs::ReadDir) -> Vec<(PathBuf, bool)> {
    let mut paths: Vec<(PathBuf, bool)> = entries
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    return None;
                }
            };
            // file_type does not follow symlinks
            match entry.file_type() {
                Ok(file_type) => Some((entry.path(), file_type.is_dir())),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    None
                }
            }
        })
        .collect();
    paths.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matching() {
        assert!(is_test_image("_testimage001.rgba"));
        assert!(is_test_image("_testimage.rgba"));
        assert!(is_test_image("_testimage_frame_12.rgba"));
        assert!(!is_test_image("testimage001.rgba"));
        assert!(!is_test_image("_testimage001.txt"));
        assert!(!is_test_image("_testimage001.rgba.bak"));
        assert!(!is_test_image("_TestImage001.rgba"));
    }

    #[test]
    fn test_derived_paths() {
        let buffer = Path::new("tree/sub/_testimage007.rgba");
        assert_eq!(sidecar_path_for(buffer), PathBuf::from("tree/sub/_testimage007.txt"));
        assert_eq!(
            output_path_for(buffer, Path::new("out")),
            Some(PathBuf::from("out/_testimage007.jpg"))
        );
    }

    #[test]
    fn test_walk_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        std::fs::write(dir.path().join("_testimage2.rgba"), b"").unwrap();
        std::fs::write(dir.path().join("_testimage1.rgba"), b"").unwrap();
        std::fs::write(dir.path().join("_testimage1.txt"), b"").unwrap();
        std::fs::write(dir.path().join("other.rgba"), b"").unwrap();
        std::fs::write(nested.join("_testimage3.rgba"), b"").unwrap();

        let found = find_test_images(dir.path()).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("_testimage1.rgba"),
                dir.path().join("_testimage2.rgba"),
                nested.join("_testimage3.rgba"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("_testimage1.rgba"), b"").unwrap();
        std::fs::write(nested.join("_testimage2.rgba"), b"").unwrap();

        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();
        std::os::unix::fs::symlink(&nested, dir.path().join("alias")).unwrap();
        std::os::unix::fs::symlink(dir.path(), nested.join("up")).unwrap();

        let found = find_test_images(dir.path()).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("_testimage1.rgba"),
                nested.join("_testimage2.rgba"),
            ]
        );
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_test_images(&dir.path().join("nope")).unwrap_err();
        assert!(err.is_fatal());
    }
}
