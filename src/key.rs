//! Key schedule and secret key container.
//!
//! The 160-bit key is held as three words. The first word carries only the
//! leading 32 key bits, in its low half, so that `key0 ^ IV` places the IV in
//! the top 32 bits of the first state word.

use core::fmt;

use rand_core::{OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::EncodingError;
use crate::state::load_bytes;
use crate::KEY_BYTES;

/// Move `lo2hi` into the high half and the high half of `hi2lo` into the low
/// half.
#[inline]
pub(crate) const fn keyrot(lo2hi: u64, hi2lo: u64) -> u64 {
    (lo2hi << 32) | (hi2lo >> 32)
}

/// Expanded key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Key {
    x: [u64; 3],
}

impl Key {
    pub fn load(raw: &[u8; KEY_BYTES]) -> Self {
        Self {
            x: [
                keyrot(0, load_bytes(&raw[..4])),
                load_bytes(&raw[4..12]),
                load_bytes(&raw[12..20]),
            ],
        }
    }

    #[inline]
    pub fn words(&self) -> &[u64; 3] {
        &self.x
    }
}

// ---------------------------------------------------------------------------
// Raw key bytes
// ---------------------------------------------------------------------------

/// A 20-byte Ascon-80pq secret key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; KEY_BYTES],
}

impl SecretKey {
    pub fn new(bytes: [u8; KEY_BYTES]) -> Self {
        Self { bytes }
    }

    /// Fresh key from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Parse raw key bytes (e.g. a key file). Length must be exactly 20.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        let bytes: [u8; KEY_BYTES] = bytes.try_into().map_err(|_| EncodingError)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.bytes
    }
}

impl From<[u8; KEY_BYTES]> for SecretKey {
    fn from(bytes: [u8; KEY_BYTES]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}
