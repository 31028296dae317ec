//! Output path derivation and atomic file writing.
//!
//! The audio payload is fully buffered before anything touches the
//! filesystem; the write goes to a temp file in the destination directory
//! and is renamed over the final path, so an interrupted run never leaves
//! a partial file behind.

pub mod wav;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::info;

use crate::error::Error;

/// Derives the output path. A user-supplied name wins (with `.wav`
/// appended unless already present); otherwise the two speaker names
/// produce `lower(a)_lower(b).wav` with non-alphanumeric characters
/// stripped.
pub fn resolve_output_path(user_supplied: Option<&str>, speakers: &[String]) -> PathBuf {
    match user_supplied {
        Some(name) => with_wav_extension(name),
        None => {
            let stem = speakers
                .iter()
                .map(|name| sanitize_name(name))
                .collect::<Vec<_>>()
                .join("_");
            PathBuf::from(format!("{stem}.wav"))
        }
    }
}

fn with_wav_extension(name: &str) -> PathBuf {
    if name.to_ascii_lowercase().ends_with(".wav") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.wav"))
    }
}

fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if sanitized.is_empty() {
        "speaker".to_string()
    } else {
        sanitized
    }
}

/// Writes the complete payload atomically, overwriting any existing file.
pub fn write_audio(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        Error::Write(anyhow!(
            "failed to create temporary file in {}: {e}",
            dir.display()
        ))
    })?;

    tmp.write_all(bytes)
        .map_err(|e| Error::Write(anyhow!("failed to write audio data: {e}")))?;

    tmp.persist(path)
        .map_err(|e| Error::Write(anyhow!("failed to persist {}: {e}", path.display())))?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote audio file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speakers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_filename_from_speaker_names() {
        let path = resolve_output_path(None, &speakers(&["Alice", "Bob"]));
        assert_eq!(path, PathBuf::from("alice_bob.wav"));
    }

    #[test]
    fn test_default_filename_is_case_insensitive() {
        let upper = resolve_output_path(None, &speakers(&["ALICE", "BOB"]));
        let lower = resolve_output_path(None, &speakers(&["alice", "bob"]));
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_default_filename_strips_non_alphanumerics() {
        let path = resolve_output_path(None, &speakers(&["Dr. O'Brien", "Anne-Marie"]));
        assert_eq!(path, PathBuf::from("drobrien_annemarie.wav"));
    }

    #[test]
    fn test_fully_symbolic_name_falls_back_to_placeholder() {
        let path = resolve_output_path(None, &speakers(&["???", "Bob"]));
        assert_eq!(path, PathBuf::from("speaker_bob.wav"));
    }

    #[test]
    fn test_user_supplied_name_wins_over_speakers() {
        let path = resolve_output_path(Some("custom"), &speakers(&["Alice", "Bob"]));
        assert_eq!(path, PathBuf::from("custom.wav"));
    }

    #[test]
    fn test_user_supplied_wav_extension_is_not_doubled() {
        assert_eq!(
            resolve_output_path(Some("custom.wav"), &[]),
            PathBuf::from("custom.wav")
        );
        assert_eq!(
            resolve_output_path(Some("custom.WAV"), &[]),
            PathBuf::from("custom.WAV")
        );
    }

    #[test]
    fn test_write_audio_overwrites_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.wav");
        std::fs::write(&path, b"old contents").unwrap();

        write_audio(&path, b"new contents").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new contents");
    }

    #[test]
    fn test_write_audio_to_missing_directory_fails_with_write_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.wav");

        let err = write_audio(&path, b"data").unwrap_err();
        assert!(matches!(err, Error::Write(_)));
        assert!(err.to_string().starts_with("write error:"));
    }
}
