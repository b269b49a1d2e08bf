//! Deterministic response variation.
//!
//! Not randomness: the variant is a pure function of the raw message bytes, so the
//! same message always gets the same phrasing. The index is the first four bytes
//! of the message's SHA-256 digest (big-endian) modulo `VARIANT_SPACE`.

use sha2::{Digest, Sha256};

/// Width of the variation index. Reply sets with fewer phrasings wrap modulo their length.
pub const VARIANT_SPACE: u32 = 3;

pub fn variant_index(message: &str) -> usize {
    let digest = Sha256::digest(message.as_bytes());
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    (prefix % VARIANT_SPACE) as usize
}

/// Picks `variants[variation % len]`. Empty input yields an empty string.
pub fn pick(variants: Vec<String>, variation: usize) -> String {
    if variants.is_empty() {
        return String::new();
    }
    let index = variation % variants.len();
    variants.into_iter().nth(index).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_index_is_stable() {
        let first = variant_index("How do I prepare for an interview?");
        for _ in 0..20 {
            assert_eq!(variant_index("How do I prepare for an interview?"), first);
        }
    }

    #[test]
    fn test_variant_index_in_range() {
        for message in ["", "a", "hello", "show my roadmap", "💼 salary?"] {
            assert!(variant_index(message) < VARIANT_SPACE as usize);
        }
    }

    #[test]
    fn test_variant_index_known_value() {
        // sha256("") = e3b0c442... → 0xe3b0c442 % 3
        assert_eq!(variant_index(""), (0xe3b0_c442_u32 % 3) as usize);
    }

    #[test]
    fn test_variant_index_spreads_over_messages() {
        let seen: std::collections::HashSet<usize> = (0..50)
            .map(|i| variant_index(&format!("message {i}")))
            .collect();
        assert_eq!(seen.len(), VARIANT_SPACE as usize);
    }

    #[test]
    fn test_pick_wraps_on_short_lists() {
        let two = || vec!["a".to_string(), "b".to_string()];
        assert_eq!(pick(two(), 0), "a");
        assert_eq!(pick(two(), 1), "b");
        assert_eq!(pick(two(), 2), "a");
        assert_eq!(pick(Vec::new(), 2), "");
    }
}
