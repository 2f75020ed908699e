//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

use crate::core::model::Meta;

/// Compute the XXH3 hash of bytes as 16 hex digits
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Capture sizes and hashes of a file's content before and after rewriting
pub fn content_meta(before: &str, after: &str) -> Meta {
    Meta {
        size_before: Some(before.len() as u64),
        size_after: Some(after.len() as u64),
        hash_before: Some(hash_bytes(before.as_bytes())),
        hash_after: Some(hash_bytes(after.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(hash.len(), 16); // 64-bit hex
        assert_eq!(hash, hash_bytes(b"hello world"));
        assert_ne!(hash, hash_bytes(b"hello world!"));
    }

    #[test]
    fn test_content_meta_unchanged() {
        let meta = content_meta("abc", "abc");
        assert_eq!(meta.size_before, Some(3));
        assert_eq!(meta.hash_before, meta.hash_after);
    }

    #[test]
    fn test_content_meta_changed() {
        let meta = content_meta("</span>x", "</span> x");
        assert_eq!(meta.size_before, Some(8));
        assert_eq!(meta.size_after, Some(9));
        assert_ne!(meta.hash_before, meta.hash_after);
    }
}
