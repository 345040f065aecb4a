//! Algorithm selection and digest encoding.
//!
//! The supported algorithms form a closed set so the core stays portable;
//! callers that carry platform-style names ("SHA-256", "SHA-1") enter
//! through [`DigestAlgorithm::from_name`].

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{DigestError, Result};
use crate::hasher::{Hasher, Sha1Hasher, Sha256Hasher};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// 256-bit hash, used for content-derived identifiers.
    Sha256,
    /// 160-bit hash, cheaper integrity checks only.
    Sha1,
}

impl DigestAlgorithm {
    /// Get the digest length in bytes for this algorithm.
    pub fn digest_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha1 => 20,
        }
    }

    /// Get the string representation of this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha1 => "sha1",
        }
    }

    /// Resolve an algorithm from its common names.
    ///
    /// Accepts both the bare form (`"sha256"`) and the dashed platform
    /// form (`"SHA-256"`), case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            _ => Err(DigestError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Create a fresh hasher for this algorithm.
    pub fn hasher(&self) -> AlgoHasher {
        match self {
            DigestAlgorithm::Sha256 => AlgoHasher::Sha256(Sha256Hasher::new()),
            DigestAlgorithm::Sha1 => AlgoHasher::Sha1(Sha1Hasher::new()),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime-selected hasher, dispatching to the concrete implementations.
pub enum AlgoHasher {
    Sha256(Sha256Hasher),
    Sha1(Sha1Hasher),
}

impl Hasher for AlgoHasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            AlgoHasher::Sha256(h) => h.update(data),
            AlgoHasher::Sha1(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            AlgoHasher::Sha256(h) => h.finalize(),
            AlgoHasher::Sha1(h) => h.finalize(),
        }
    }
}

/// Encode a raw digest as URL- and filesystem-safe base64, no padding.
pub fn encode_digest(digest: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(digest)
}
