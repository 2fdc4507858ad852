//! HFS obfuscation cipher.
//!
//! HFS archives XOR file names and file content against a fixed key stream.
//! The stream is keyed by the absolute offset of each byte within the source
//! archive, so the same key decodes every region regardless of where it
//! starts, and applying the cipher twice restores the original bytes.

use crate::{Error, Result};

/// Cipher algorithms understood by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMethod {
    /// XOR against a repeating key, indexed by absolute archive offset.
    GlobalXor,
}

impl CipherMethod {
    /// Resolve a cipher method from its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "GLOBAL_XOR_CIPHER" => Ok(Self::GlobalXor),
            other => Err(Error::UnsupportedCipher(other.to_string())),
        }
    }
}

/// A cipher method paired with its key.
#[derive(Debug, Clone)]
pub struct CipherSpec {
    /// The algorithm to apply.
    pub method: CipherMethod,
    /// Key bytes. For [`CipherMethod::GlobalXor`] the length must be a
    /// non-zero power of two.
    pub key: Vec<u8>,
}

impl CipherSpec {
    /// Create a global-XOR cipher spec from key bytes.
    pub fn global_xor(key: Vec<u8>) -> Self {
        Self {
            method: CipherMethod::GlobalXor,
            key,
        }
    }

    /// Apply this cipher to `buffer` in place.
    ///
    /// `position` is the absolute offset of `buffer[0]` within the source
    /// archive buffer, not an offset relative to the region being ciphered.
    pub fn apply(&self, buffer: &mut [u8], position: usize) -> Result<()> {
        apply_cipher(self.method, buffer, &self.key, position)
    }
}

/// Apply a cipher to `buffer` in place.
pub fn apply_cipher(
    method: CipherMethod,
    buffer: &mut [u8],
    key: &[u8],
    position: usize,
) -> Result<()> {
    match method {
        CipherMethod::GlobalXor => global_xor(buffer, key, position),
    }
}

/// XOR `buffer[k]` with `key[(position + k) mod key.len()]`.
///
/// The modulo is a bitmask, so the key length must be a non-zero power of
/// two; anything else would produce a wrong key stream and is rejected.
fn global_xor(buffer: &mut [u8], key: &[u8], position: usize) -> Result<()> {
    if !key.len().is_power_of_two() {
        return Err(Error::InvalidCipherKey(key.len()));
    }

    let mask = key.len() - 1;
    for (k, byte) in buffer.iter_mut().enumerate() {
        *byte ^= key[(position + k) & mask];
    }

    Ok(())
}
