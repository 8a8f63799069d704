//! Horner's rule string digest used to find a key's home slot.

/// Number of leading characters that contribute to a key's digest.
pub const PREFIX_LEN: usize = 8;

/// Radix of the positional digest.
pub const BASE: u64 = 31;

/// Computes the digest of `key`.
///
/// Each of the first [`PREFIX_LEN`] characters is used as a base [`BASE`] digit, with the first
/// character being the most significant one. Characters past the prefix are ignored, so all keys
/// sharing an 8 character prefix have the same digest.
///
/// The result cannot overflow: even 8 copies of `char::MAX` stay well below `u64::MAX`.
#[inline]
pub fn horner_digest(key: &str) -> u64 {
    key.chars()
        .take(PREFIX_LEN)
        .fold(0, |digest, ch| digest * BASE + u64::from(ch))
}

/// Reduces the digest of `key` to a slot index for a table with `capacity` slots.
#[inline]
pub fn home_slot(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (horner_digest(key) % capacity as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_vectors() {
        assert_eq!(horner_digest(""), 0);
        assert_eq!(horner_digest("a"), 97);
        assert_eq!(horner_digest("cat"), 99 * 31 * 31 + 97 * 31 + 116);
        assert_eq!(horner_digest("abcdefgh"), 2758628677764);
    }

    #[test]
    fn only_prefix_matters() {
        assert_eq!(horner_digest("abcdefgh"), horner_digest("abcdefghij"));
        assert_eq!(
            horner_digest("concordance"),
            horner_digest("concordant")
        );
        assert_ne!(horner_digest("abcdefg"), horner_digest("abcdefgh"));
    }

    #[test]
    fn non_ascii_digits() {
        assert_eq!(horner_digest("é"), 0xe9);
        assert_eq!(horner_digest("\u{10ffff}"), 0x10ffff);
        let max = String::from_iter(std::iter::repeat(char::MAX).take(PREFIX_LEN));
        assert!(horner_digest(&max) > 0);
    }

    #[test]
    fn home_slot_in_range() {
        for capacity in [1, 2, 7, 15, 191, 383, 767] {
            for key in ["", "a", "cat", "elephant", "antidisestablishment", "ünïcödé"] {
                assert!(home_slot(key, capacity) < capacity);
            }
        }
        assert_eq!(home_slot("cat", 7), 3);
        assert_eq!(home_slot("anything", 1), 0);
    }
}
