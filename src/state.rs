//! Typed sponge state and word/byte conversion.
//!
//! Words are loaded with the first byte in the most significant position.
//! Partial words are left-aligned, so the padding bit for an `n`-byte tail
//! sits in byte `n`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::key::{keyrot, Key};
use crate::permutation::{Permutation, Rounds};
use crate::{NONCE_BYTES, STATE_WORDS, TAG_BYTES};

/// Lanes the widest rate can expose.
pub(crate) const MAX_RATE_LANES: usize = 2;

/// Load up to 8 bytes into a left-aligned word.
#[inline]
pub(crate) fn load_bytes(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (56 - 8 * i)))
}

/// Store the leading `out.len()` bytes of `word`.
#[inline]
pub(crate) fn store_bytes(out: &mut [u8], word: u64) {
    debug_assert!(out.len() <= 8);
    for (i, b) in out.iter_mut().enumerate() {
        *b = (word >> (56 - 8 * i)) as u8;
    }
}

/// Padding marker directly after an `n`-byte tail (`n < 8`).
#[inline]
pub(crate) const fn pad(n: usize) -> u64 {
    0x80 << (56 - 8 * n)
}

/// Zero the leading `n` bytes of `word`. The mask depends only on `n`.
#[inline]
pub(crate) fn clear(word: u64, n: usize) -> u64 {
    let keep = u64::MAX.checked_shr(8 * n as u32).unwrap_or(0);
    word & keep
}

/// The 320-bit Ascon state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    x: [u64; STATE_WORDS],
}

impl State {
    /// Initial layout: `key0 ^ iv, key1, key2, nonce0, nonce1`.
    pub fn seed(key: &Key, iv: u64, nonce: &[u8; NONCE_BYTES]) -> Self {
        let k = key.words();
        Self {
            x: [
                k[0] ^ iv,
                k[1],
                k[2],
                load_bytes(&nonce[..8]),
                load_bytes(&nonce[8..]),
            ],
        }
    }

    #[inline]
    pub fn permute<P: Permutation>(&mut self, rounds: Rounds) {
        P::permute(&mut self.x, rounds);
    }

    #[cfg(test)]
    pub(crate) fn lane(&self, i: usize) -> u64 {
        debug_assert!(i < MAX_RATE_LANES);
        self.x[i]
    }

    #[inline]
    pub fn lane_mut(&mut self, i: usize) -> &mut u64 {
        debug_assert!(i < MAX_RATE_LANES);
        &mut self.x[i]
    }

    /// Second key addition of initialization: key into the last three words.
    pub fn mix_key_into_capacity(&mut self, key: &Key) {
        let k = key.words();
        self.x[2] ^= k[0];
        self.x[3] ^= k[1];
        self.x[4] ^= k[2];
    }

    /// Separate the associated-data phase from the message phase.
    #[inline]
    pub fn separate_domain(&mut self) {
        self.x[4] ^= 1;
    }

    /// First key addition of finalization, shifted by 32 bits so the 160-bit
    /// key lines up right after the rate.
    pub fn mix_key_for_finalization(&mut self, key: &Key) {
        let k = key.words();
        self.x[1] ^= keyrot(k[0], k[1]);
        self.x[2] ^= keyrot(k[1], k[2]);
        self.x[3] ^= keyrot(k[2], 0);
    }

    /// Second key addition of finalization, over the tag words.
    pub fn mix_key_into_tag(&mut self, key: &Key) {
        let k = key.words();
        self.x[3] ^= k[1];
        self.x[4] ^= k[2];
    }

    /// The two tag words.
    #[inline]
    pub fn tag_lanes(&self) -> (u64, u64) {
        (self.x[3], self.x[4])
    }

    pub fn tag(&self) -> [u8; TAG_BYTES] {
        let mut out = [0u8; TAG_BYTES];
        let (t0, t1) = self.tag_lanes();
        store_bytes(&mut out[..8], t0);
        store_bytes(&mut out[8..], t1);
        out
    }

    /// Dump the state at TRACE level (feature `trace-state` only).
    #[inline(always)]
    pub fn trace(&self, _phase: &'static str) {
        #[cfg(feature = "trace-state")]
        tracing::trace!(
            target: "ascon_pq::state",
            phase = _phase,
            "x0={:016x} x1={:016x} x2={:016x} x3={:016x} x4={:016x}",
            self.x[0],
            self.x[1],
            self.x[2],
            self.x[3],
            self.x[4]
        );
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u64; STATE_WORDS] {
        &self.x
    }
}
