//! Const evaluation utilities

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Extract nibble N (0-15) from the 64-bit FNV-1a hash of `s`.
///
/// Derived types build their tag stream from this and a location string.
pub const fn hash_nibble(s: &str, n: u8) -> u8 {
    word_nibble(fnv1a_64_str(s), n)
}

/// Extract nibble N (0-15) of a 64-bit word, low nibble first.
pub const fn word_nibble(word: u64, n: u8) -> u8 {
    ((word >> ((n as u32) * 4)) & 0xF) as u8
}
