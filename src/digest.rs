//! Hashing text into a [`Digest`], the seed every text-derived palette grows from. The hash is MD5,
//! which only needs to be deterministic here, not cryptographically strong.

use std::fmt;

/// An MD5 digest of some text. Displays as 32 lowercase hexadecimal characters.
/// # Example
/// ```
/// # use hashtint::digest::digest;
/// assert_eq!(digest("").to_string(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest([u8; 16]);

/// Computes the MD5 digest of the UTF-8 bytes of `text`. Any string, including the empty string, has
/// a digest.
pub fn digest(text: &str) -> Digest {
    Digest(md5::compute(text.as_bytes()).0)
}

impl Digest {
    /// The raw 16 bytes of the digest.
    pub fn bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The `i`-th hue source: the two hex characters starting at `(2 * i) mod 32` in the displayed
    /// digest, read as a hexadecimal number. That offset is always even and at most 30, so the pair
    /// is never cut short and this is exactly byte `i mod 16`; indices past the end of the digest
    /// cycle back to the start.
    pub fn hue_source(&self, i: usize) -> u8 {
        let bytes = self.bytes();
        bytes[i % bytes.len()]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
