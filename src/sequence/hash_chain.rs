//! MD5 hash-chain expansion of a seed string.

/// Lowercase hex MD5 digest (32 characters) of the UTF-8 bytes of `input`.
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// A fixed-length run of hex characters expanded from a seed.
///
/// Each element is an ASCII character from `0-9a-f`; displacement uses its
/// code point, not its hex value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSequence {
    bytes: Vec<u8>,
}

impl SeedSequence {
    /// Expands `seed` into exactly `len` characters.
    ///
    /// Starts from `md5(seed)` and keeps appending the digest of everything
    /// accumulated so far until the string is long enough, then truncates.
    /// Any seed is accepted, including the empty string.
    pub fn generate(seed: &str, len: usize) -> Self {
        let mut chain = md5_hex(seed);
        while chain.len() < len {
            let next = md5_hex(&chain);
            chain.push_str(&next);
        }
        chain.truncate(len);

        Self {
            bytes: chain.into_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The sequence as text (always valid ASCII).
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Code point of element `i` as a float (`'0'` is 48.0, `'a'` is 97.0).
    pub fn byte_value(&self, i: usize) -> f32 {
        self.bytes[i] as f32
    }
}
