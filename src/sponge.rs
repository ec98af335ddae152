//! Duplex sponge core.
//!
//! Phases are encoded in the type: `Sponge<P, Initialized>` can only absorb
//! associated data, `Sponge<P, Absorbed>` can only process one message, and
//! `Sponge<P, Squeezed>` can only be finalized. Every transition consumes the
//! sponge, so no phase runs twice on the same state.

use core::marker::PhantomData;

use crate::key::Key;
use crate::permutation::Permutation;
use crate::state::{clear, load_bytes, pad, store_bytes, State};
use crate::variant::Variant;
use crate::{NONCE_BYTES, TAG_BYTES};

/// Key and nonce loaded, ready for associated data.
pub(crate) struct Initialized;
/// Domain separated, ready for the message.
pub(crate) struct Absorbed;
/// Message processed, ready for the tag.
pub(crate) struct Squeezed;

pub(crate) struct Sponge<P, Phase> {
    state: State,
    variant: Variant,
    _marker: PhantomData<(P, Phase)>,
}

impl<P: Permutation, Phase> Sponge<P, Phase> {
    fn advance<Next>(self) -> Sponge<P, Next> {
        Sponge {
            state: self.state,
            variant: self.variant,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn permute_light(&mut self) {
        self.state.permute::<P>(self.variant.light_rounds());
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &State {
        &self.state
    }
}

impl<P: Permutation> Sponge<P, Initialized> {
    pub fn init(variant: Variant, key: &Key, nonce: &[u8; NONCE_BYTES]) -> Self {
        let mut state = State::seed(key, variant.iv(), nonce);
        state.trace("init 1st key xor");
        state.permute::<P>(variant.heavy_rounds());
        state.mix_key_into_capacity(key);
        state.trace("init 2nd key xor");
        Self {
            state,
            variant,
            _marker: PhantomData,
        }
    }

    /// Absorb associated data, then separate domains.
    ///
    /// Empty associated data skips the padded block entirely; the domain
    /// separation bit is set either way.
    pub fn absorb_ad(mut self, ad: &[u8]) -> Sponge<P, Absorbed> {
        if !ad.is_empty() {
            let rate = self.variant.rate();
            let mut blocks = ad.chunks_exact(rate);
            for block in &mut blocks {
                for (lane, word) in block.chunks_exact(8).enumerate() {
                    *self.state.lane_mut(lane) ^= load_bytes(word);
                }
                self.state.trace("absorb adata");
                self.permute_light();
            }

            let (lane, tail) = self.absorb_whole_lanes(blocks.remainder());
            *self.state.lane_mut(lane) ^= pad(tail.len()) ^ load_bytes(tail);
            self.state.trace("pad adata");
            self.permute_light();
        }

        self.state.separate_domain();
        self.state.trace("domain separation");
        self.advance()
    }

    /// XOR the complete 8-byte words of a final block into the leading
    /// lanes. Returns the next free lane and the leftover bytes (< 8).
    fn absorb_whole_lanes<'a>(&mut self, remainder: &'a [u8]) -> (usize, &'a [u8]) {
        let mut words = remainder.chunks_exact(8);
        let mut lane = 0;
        for word in &mut words {
            *self.state.lane_mut(lane) ^= load_bytes(word);
            lane += 1;
        }
        (lane, words.remainder())
    }
}

impl<P: Permutation> Sponge<P, Absorbed> {
    /// Encrypt `buffer` in place.
    pub fn encrypt(mut self, buffer: &mut [u8]) -> Sponge<P, Squeezed> {
        let rate = self.variant.rate();
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            for (lane, word) in block.chunks_exact_mut(8).enumerate() {
                let x = self.state.lane_mut(lane);
                *x ^= load_bytes(word);
                store_bytes(word, *x);
            }
            self.state.trace("absorb plaintext");
            self.permute_light();
        }

        let tail = blocks.into_remainder();
        let mut words = tail.chunks_exact_mut(8);
        let mut lane = 0;
        for word in &mut words {
            let x = self.state.lane_mut(lane);
            *x ^= load_bytes(word);
            store_bytes(word, *x);
            lane += 1;
        }
        let last = words.into_remainder();
        let x = self.state.lane_mut(lane);
        *x ^= pad(last.len()) ^ load_bytes(last);
        store_bytes(last, *x);
        self.state.trace("pad plaintext");
        self.advance()
    }

    /// Decrypt `buffer` in place. The ciphertext, not the recovered
    /// plaintext, is written back into the rate.
    pub fn decrypt(mut self, buffer: &mut [u8]) -> Sponge<P, Squeezed> {
        let rate = self.variant.rate();
        let mut blocks = buffer.chunks_exact_mut(rate);
        for block in &mut blocks {
            for (lane, word) in block.chunks_exact_mut(8).enumerate() {
                let cx = load_bytes(word);
                let x = self.state.lane_mut(lane);
                store_bytes(word, *x ^ cx);
                *x = cx;
            }
            self.state.trace("insert ciphertext");
            self.permute_light();
        }

        let tail = blocks.into_remainder();
        let mut words = tail.chunks_exact_mut(8);
        let mut lane = 0;
        for word in &mut words {
            let cx = load_bytes(word);
            let x = self.state.lane_mut(lane);
            store_bytes(word, *x ^ cx);
            *x = cx;
            lane += 1;
        }

        // Final partial lane: the message bytes of the lane become the
        // ciphertext bytes, the remaining bytes keep state ^ padding.
        let last = words.into_remainder();
        let n = last.len();
        let cx = load_bytes(last);
        let x = self.state.lane_mut(lane);
        *x ^= pad(n);
        *x ^= cx;
        store_bytes(last, *x);
        *x = clear(*x, n) ^ cx;
        self.state.trace("pad ciphertext");
        self.advance()
    }
}

impl<P: Permutation> Sponge<P, Squeezed> {
    /// Final key additions and heavy permutation. Returns the state holding
    /// the tag; it is wiped when dropped.
    pub fn finalize(mut self, key: &Key) -> State {
        self.state.mix_key_for_finalization(key);
        self.state.trace("final 1st key xor");
        self.state.permute::<P>(self.variant.heavy_rounds());
        self.state.mix_key_into_tag(key);
        self.state.trace("final 2nd key xor");
        self.state
    }

    pub fn tag(self, key: &Key) -> [u8; TAG_BYTES] {
        self.finalize(key).tag()
    }
}
