//! Hand-off path for media the library does not embed into itself (video
//! containers and friends).
//!
//! The embedding is performed by an external desktop tool outside of this
//! process: this module only stages the message as a plain text file next to
//! the untouched host, and reads such a file back after the external tool
//! extracted it. No steganography happens here.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StegoError;
use crate::result::Result;

/// the pair of paths an external embedding tool needs: the untouched host
/// and the staged message file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEmbedding {
    pub host: PathBuf,
    pub embed_file: PathBuf,
}

/// Stages `message` as a UTF-8 text file at `embed_file` for an external
/// tool to embed into `host`. The host is validated but never modified.
pub fn prepare_embedding(host: &Path, message: &str, embed_file: &Path) -> Result<ExternalEmbedding> {
    if !host.exists() {
        return Err(StegoError::CarrierNotFound(host.to_path_buf()));
    }

    fs::write(embed_file, message).map_err(|source| StegoError::WriteError { source })?;
    debug!("staged external embed file at {embed_file:?} for host {host:?}");

    Ok(ExternalEmbedding {
        host: host.to_path_buf(),
        embed_file: embed_file.to_path_buf(),
    })
}

/// Reads back a message file an external tool extracted from its host. A
/// plain pass-through file read.
pub fn read_back(extracted: &Path) -> Result<String> {
    if !extracted.exists() {
        return Err(StegoError::CarrierNotFound(extracted.to_path_buf()));
    }

    fs::read_to_string(extracted).map_err(|source| StegoError::ReadError { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_stage_the_message_and_return_both_paths() {
        let dir = TempDir::new().unwrap();
        let host = dir.path().join("holiday.mp4");
        let embed_file = dir.path().join("embedded_message.txt");
        fs::write(&host, b"fake video bytes").unwrap();

        let staged = prepare_embedding(&host, "meet at noon", &embed_file).unwrap();

        assert_eq!(staged.host, host);
        assert_eq!(staged.embed_file, embed_file);
        assert_eq!(fs::read_to_string(&embed_file).unwrap(), "meet at noon");
        assert_eq!(fs::read(&host).unwrap(), b"fake video bytes");
    }

    #[test]
    fn should_reject_a_missing_host() {
        let dir = TempDir::new().unwrap();
        let embed_file = dir.path().join("embedded_message.txt");

        let result = prepare_embedding(Path::new("gone.mp4"), "x", &embed_file);

        match result.err() {
            Some(StegoError::CarrierNotFound(_)) => (),
            other => panic!("expected CarrierNotFound, got {other:?}"),
        }
        assert!(!embed_file.exists(), "nothing may be staged without a host");
    }

    #[test]
    fn should_read_an_extracted_file_back_verbatim() {
        let dir = TempDir::new().unwrap();
        let extracted = dir.path().join("from_the_tool.txt");
        fs::write(&extracted, "the message\nwith two lines").unwrap();

        assert_eq!(
            read_back(&extracted).unwrap(),
            "the message\nwith two lines"
        );
    }

    #[test]
    fn should_reject_a_missing_extracted_file() {
        match read_back(Path::new("never_extracted.txt")).err() {
            Some(StegoError::CarrierNotFound(_)) => (),
            other => panic!("expected CarrierNotFound, got {other:?}"),
        }
    }
}
