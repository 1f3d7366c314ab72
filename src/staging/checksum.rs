//! Checksum calculation for transfer verification.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::Result;

/// SHA-256 digest of a byte buffer as a lowercase hex string.
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// SHA-256 digest of a file's contents.
pub fn file_sha256(path: &Path) -> Result<String> {
    Ok(sha256_hex(&std::fs::read(path)?))
}
