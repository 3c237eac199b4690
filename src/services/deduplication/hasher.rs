//! Fingerprint hashing for index keys.
//!
//! Fingerprints can run to 500 characters. Stores that index them usually want
//! a fixed-width key, so this module hashes the fingerprint with SHA-256.

use sha2::{Digest, Sha256};

use super::fingerprint::content_fingerprint;

/// Tag prefix for fingerprint hashes.
const TAG_PREFIX: &str = "fp:sha256:";

/// Hashes content fingerprints.
///
/// Two texts hash equal exactly when their fingerprints are equal, so the hash
/// inherits the fingerprint's tolerance to case, punctuation and placeholder
/// syntax.
///
/// # Example
///
/// ```rust
/// use promptkit::services::deduplication::ContentHasher;
///
/// let hash = ContentHasher::hash("Summarize ${text} in one line.");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, ContentHasher::hash("summarize [TEXT] in one line"));
/// ```
pub struct ContentHasher;

impl ContentHasher {
    /// Returns the lowercase hex SHA-256 of the content fingerprint.
    #[must_use]
    pub fn hash(content: &str) -> String {
        Self::hash_fingerprint(&content_fingerprint(content))
    }

    /// Hashes a fingerprint that was already computed.
    #[must_use]
    pub fn hash_fingerprint(fingerprint: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(fingerprint.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Converts a hash to the tag format `fp:sha256:<16-char-prefix>`.
    ///
    /// Uses the full hash if it is shorter than 16 characters.
    #[must_use]
    pub fn hash_to_tag(hash: &str) -> String {
        let prefix_len = hash.len().min(16);
        format!("{TAG_PREFIX}{}", &hash[..prefix_len])
    }

    /// Computes a hash and returns it in tag format.
    #[must_use]
    pub fn content_to_tag(content: &str) -> String {
        Self::hash_to_tag(&Self::hash(content))
    }
}
