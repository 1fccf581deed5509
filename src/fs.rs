//! Filesystem access for the three configured folders.
//!
//! All request-supplied filenames pass through [`sanitize_filename`] and
//! [`resolve_within`] before any IO, so nothing escapes its folder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::sort::natural_cmp;

/// Validate a request-supplied filename.
///
/// Returns an error if the filename is empty, contains path traversal
/// sequences or separators, or is absolute.
pub fn sanitize_filename(filename: &str) -> AppResult<&str> {
    if filename.is_empty() {
        return Err(AppError::BadRequest("Filename cannot be empty".to_string()));
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!(filename = %filename, "Path traversal attempt blocked");
        return Err(AppError::path_traversal());
    }

    // Reject absolute paths (Unix and Windows)
    if filename.starts_with('/') || filename.chars().nth(1) == Some(':') {
        return Err(AppError::path_traversal());
    }

    Ok(filename)
}

/// Resolve a filename against a folder, verifying the result stays inside.
///
/// The canonicalization check only applies to existing files; callers decide
/// what a missing file means (404 for reads, fresh target for writes).
pub fn resolve_within(root: &Path, filename: &str) -> AppResult<PathBuf> {
    let filename = sanitize_filename(filename)?;
    let path = root.join(filename);

    if path.exists() {
        let canonical = path.canonicalize()?;
        let root_canonical = root
            .canonicalize()
            .map_err(|_| AppError::folder_not_found(root))?;

        if !canonical.starts_with(&root_canonical) {
            tracing::warn!(
                requested = %canonical.display(),
                root = %root_canonical.display(),
                "Path escape attempt blocked"
            );
            return Err(AppError::path_traversal());
        }
    }

    Ok(path)
}

/// List `.mp3` files in the audio folder, naturally sorted.
pub fn list_audio_files(folder: &Path) -> AppResult<Vec<String>> {
    if !folder.exists() {
        return Err(AppError::folder_not_found(folder));
    }

    let mut files: Vec<String> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".mp3"))
        .collect();

    files.sort_by(|a, b| natural_cmp(a, b));

    Ok(files)
}

/// Read a lyrics file as UTF-8 text.
pub fn read_lyrics(folder: &Path, filename: &str) -> AppResult<String> {
    let path = resolve_within(folder, filename)?;

    if !path.exists() {
        return Err(AppError::lyrics_not_found(filename));
    }

    Ok(fs::read_to_string(&path)?)
}

/// Alignment file name for an audio file: stem plus `_alignment.txt`.
pub fn alignment_file_name(audio_filename: &str) -> String {
    let stem = Path::new(audio_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(audio_filename);
    format!("{}_alignment.txt", stem)
}

/// Write alignment text for an audio file, overwriting any previous save.
///
/// Concurrent saves to the same file are last-write-wins.
pub fn write_alignment(folder: &Path, audio_filename: &str, lyrics: &str) -> AppResult<PathBuf> {
    let filename = sanitize_filename(audio_filename)?;
    let target = folder.join(alignment_file_name(filename));

    fs::write(&target, lyrics)?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert!(sanitize_filename("song.mp3").is_ok());
        assert!(sanitize_filename("My Song (2023).mp3").is_ok());
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
        assert!(sanitize_filename("/etc/passwd").is_err());
        assert!(sanitize_filename("").is_err());
    }

    #[test]
    fn test_list_audio_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.mp3", "a.mp3", "track10.mp3", "track2.mp3", "notes.txt"] {
            touch(&dir, name);
        }

        let files = list_audio_files(dir.path()).unwrap();
        assert_eq!(files, vec!["a.mp3", "b.mp3", "track2.mp3", "track10.mp3"]);
    }

    #[test]
    fn test_list_audio_files_suffix_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "loud.MP3");
        touch(&dir, "quiet.mp3");

        let files = list_audio_files(dir.path()).unwrap();
        assert_eq!(files, vec!["quiet.mp3"]);
    }

    #[test]
    fn test_list_audio_files_missing_folder() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");

        let err = list_audio_files(&missing).unwrap_err();
        assert!(err.to_string().contains(missing.to_str().unwrap()));
    }

    #[test]
    fn test_read_lyrics_round_trip() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("song1.txt"), "la la la\nsecond line").unwrap();

        let text = read_lyrics(dir.path(), "song1.txt").unwrap();
        assert_eq!(text, "la la la\nsecond line");
    }

    #[test]
    fn test_read_lyrics_missing() {
        let dir = TempDir::new().unwrap();
        let err = read_lyrics(dir.path(), "missing.txt").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_read_lyrics_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let err = read_lyrics(dir.path(), "../secret.txt").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_alignment_file_name_strips_extension() {
        assert_eq!(alignment_file_name("song1.mp3"), "song1_alignment.txt");
        assert_eq!(alignment_file_name("no_extension"), "no_extension_alignment.txt");
    }

    #[test]
    fn test_write_alignment_round_trip() {
        let dir = TempDir::new().unwrap();

        let target = write_alignment(dir.path(), "song1.mp3", "line1\nline2").unwrap();
        assert_eq!(target, dir.path().join("song1_alignment.txt"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "line1\nline2");
    }

    #[test]
    fn test_write_alignment_overwrites() {
        let dir = TempDir::new().unwrap();

        write_alignment(dir.path(), "song1.mp3", "first").unwrap();
        let target = write_alignment(dir.path(), "song1.mp3", "second").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn test_write_alignment_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let err = write_alignment(dir.path(), "../evil.mp3", "text").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_resolve_within_symlink_escape() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "hidden").unwrap();

        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(
                outside.path().join("secret.txt"),
                root.path().join("link.txt"),
            )
            .unwrap();

            let err = resolve_within(root.path(), "link.txt").unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }
}
