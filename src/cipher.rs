//! Ascon-80pq encrypt / decrypt over a pluggable permutation.

use alloc::vec::Vec;

use core::marker::PhantomData;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::AuthenticationFailure;
use crate::key::Key;
use crate::permutation::{AsconPermutation, Permutation};
use crate::sponge::{Initialized, Sponge};
use crate::state::{load_bytes, State};
use crate::variant::Variant;
use crate::{KEY_BYTES, NONCE_BYTES, TAG_BYTES};

/// Ascon-80pq cipher for one configured [`Variant`].
///
/// Holds no key material: every call takes the key, expands it, and wipes
/// the expansion before returning.
pub struct Cipher<P: Permutation = AsconPermutation> {
    variant: Variant,
    _marker: PhantomData<P>,
}

impl<P: Permutation> Clone for Cipher<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Permutation> Copy for Cipher<P> {}

impl<P: Permutation> core::fmt::Debug for Cipher<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cipher").field("variant", &self.variant).finish()
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher {
    /// Standard Ascon-80pq (64-bit rate).
    pub fn new() -> Self {
        Self::with_variant(Variant::default())
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self::with_permutation(variant)
    }
}

impl<P: Permutation> Cipher<P> {
    /// Cipher over a caller-supplied permutation provider.
    pub fn with_permutation(variant: Variant) -> Self {
        Self {
            variant,
            _marker: PhantomData,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encrypt `plaintext`, returning `ciphertext || tag`.
    ///
    /// Output length is always `plaintext.len() + TAG_BYTES`.
    pub fn encrypt(
        &self,
        key: &[u8; KEY_BYTES],
        nonce: &[u8; NONCE_BYTES],
        ad: &[u8],
        plaintext: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(plaintext.len() + TAG_BYTES);
        out.extend_from_slice(plaintext);
        let tag = self.encrypt_in_place_detached(key, nonce, ad, &mut out);
        out.extend_from_slice(&tag);
        out
    }

    /// Decrypt `ciphertext || tag`.
    ///
    /// Fails on inputs shorter than a tag and on any tag mismatch. No
    /// plaintext byte is returned or left behind on failure.
    pub fn decrypt(
        &self,
        key: &[u8; KEY_BYTES],
        nonce: &[u8; NONCE_BYTES],
        ad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, AuthenticationFailure> {
        let Some(body_len) = ciphertext.len().checked_sub(TAG_BYTES) else {
            tracing::debug!(len = ciphertext.len(), "ciphertext shorter than tag");
            return Err(AuthenticationFailure);
        };
        let (body, tag) = ciphertext.split_at(body_len);
        let tag: &[u8; TAG_BYTES] = tag.try_into().map_err(|_| AuthenticationFailure)?;

        let mut out = body.to_vec();
        self.decrypt_in_place_detached(key, nonce, ad, &mut out, tag)?;
        Ok(out)
    }

    /// Encrypt `buffer` in place and return the detached tag.
    pub fn encrypt_in_place_detached(
        &self,
        key: &[u8; KEY_BYTES],
        nonce: &[u8; NONCE_BYTES],
        ad: &[u8],
        buffer: &mut [u8],
    ) -> [u8; TAG_BYTES] {
        let key = Key::load(key);
        Sponge::<P, Initialized>::init(self.variant, &key, nonce)
            .absorb_ad(ad)
            .encrypt(buffer)
            .tag(&key)
    }

    /// Decrypt `buffer` in place against a detached tag.
    ///
    /// On failure the buffer is zeroized before the error is returned.
    pub fn decrypt_in_place_detached(
        &self,
        key: &[u8; KEY_BYTES],
        nonce: &[u8; NONCE_BYTES],
        ad: &[u8],
        buffer: &mut [u8],
        tag: &[u8; TAG_BYTES],
    ) -> Result<(), AuthenticationFailure> {
        let key = Key::load(key);
        let state = Sponge::<P, Initialized>::init(self.variant, &key, nonce)
            .absorb_ad(ad)
            .decrypt(buffer)
            .finalize(&key);

        if bool::from(tag_matches(&state, tag)) {
            Ok(())
        } else {
            buffer.zeroize();
            tracing::debug!(len = buffer.len(), "tag verification failed");
            Err(AuthenticationFailure)
        }
    }
}

/// Compare the computed tag against `candidate` without early exit: XOR
/// both words, OR them together, and test the result against zero.
fn tag_matches(state: &State, candidate: &[u8; TAG_BYTES]) -> Choice {
    let (t0, t1) = state.tag_lanes();
    let diff = (t0 ^ load_bytes(&candidate[..8])) | (t1 ^ load_bytes(&candidate[8..]));
    diff.ct_eq(&0)
}

/// Ascon-80pq encryption with the standard variant.
pub fn encrypt(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ad: &[u8],
    plaintext: &[u8],
) -> Vec<u8> {
    Cipher::new().encrypt(key, nonce, ad, plaintext)
}

/// Ascon-80pq decryption with the standard variant.
pub fn decrypt(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, AuthenticationFailure> {
    Cipher::new().decrypt(key, nonce, ad, ciphertext)
}
