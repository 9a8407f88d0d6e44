//! where: signer bootstrap; what: read a hex private key from disk; why: the key file is the only credential input

use alloy_signer_local::PrivateKeySigner;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("failed to read key file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("key file is empty")]
    Empty,
    #[error("invalid private key")]
    InvalidKey,
}

pub fn load_signer(path: impl AsRef<Path>) -> Result<PrivateKeySigner, KeyError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| KeyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let signer = parse_signer(&raw)?;
    debug!(path = %path.display(), address = %signer.address(), "loaded signer");
    Ok(signer)
}

pub fn parse_signer(raw: &str) -> Result<PrivateKeySigner, KeyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(KeyError::Empty);
    }
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex_part.parse().map_err(|_| KeyError::InvalidKey)
}
