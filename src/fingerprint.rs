//! Issue fingerprints shared by every converter.
//!
//! A fingerprint identifies one issue occurrence across CI runs. It is the
//! BLAKE3 digest of the raw message, the path and the line, so the same finding
//! reported by any tool hashes the same way.

/// Separates the hashed fields so `("ab", "c")` and `("a", "bc")` differ.
const FIELD_SEPARATOR: &[u8] = b"\0";

/// Compute the fingerprint of a finding as a lowercase hex string (64 chars).
pub fn create_fingerprint(message: &str, path: &str, line: u64) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(message.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(path.as_bytes());
    hasher.update(FIELD_SEPARATOR);
    hasher.update(line.to_string().as_bytes());
    hasher.finalize().to_hex().to_string()
}
