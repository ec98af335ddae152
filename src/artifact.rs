//! Sealed artifact format
//!
//! Layout:
//!   nonce[16] || ciphertext[n] || tag[16]
//!
//! The nonce is drawn fresh from the OS for every seal. Nothing else is
//! stored: the reader must know the key, the associated data and the variant.

use alloc::vec::Vec;

use getrandom::getrandom;

use crate::cipher::Cipher;
use crate::error::{AuthenticationFailure, EncodingError};
use crate::permutation::Permutation;
use crate::{KEY_BYTES, NONCE_BYTES, TAG_BYTES};

/// Minimum artifact size: nonce + tag (empty plaintext).
pub const MIN_ARTIFACT_BYTES: usize = NONCE_BYTES + TAG_BYTES; // 32

/// Fixed associated data of the hacklab file format: `"abc123"` followed by
/// zero bytes, 16 bytes in total.
pub const LEGACY_ASSOCIATED_DATA: [u8; 16] = *b"abc123\0\0\0\0\0\0\0\0\0\0";

/// Borrowed view of a parsed artifact. Only [`decode_artifact`] builds one,
/// so `sealed` always holds at least a tag.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactParts<'a> {
    nonce: &'a [u8; NONCE_BYTES],
    sealed: &'a [u8],
}

impl<'a> ArtifactParts<'a> {
    pub fn nonce(&self) -> &'a [u8; NONCE_BYTES] {
        self.nonce
    }

    /// `ciphertext || tag`
    pub fn sealed(&self) -> &'a [u8] {
        self.sealed
    }

    /// Length of the plaintext this artifact decrypts to.
    pub fn plaintext_len(&self) -> usize {
        self.sealed.len() - TAG_BYTES
    }

    pub fn tag(&self) -> &'a [u8] {
        &self.sealed[self.plaintext_len()..]
    }
}

/// Generate a random 16-byte nonce. Used when sealing only.
pub fn generate_nonce() -> Result<[u8; NONCE_BYTES], EncodingError> {
    let mut n = [0u8; NONCE_BYTES];
    getrandom(&mut n).map_err(|_| EncodingError)?;
    Ok(n)
}

pub fn decode_artifact(data: &[u8]) -> Result<ArtifactParts<'_>, AuthenticationFailure> {
    if data.len() < MIN_ARTIFACT_BYTES {
        return Err(AuthenticationFailure);
    }

    let (nonce, sealed) = data.split_at(NONCE_BYTES);
    let nonce: &[u8; NONCE_BYTES] = nonce.try_into().map_err(|_| AuthenticationFailure)?;

    Ok(ArtifactParts { nonce, sealed })
}

pub fn encode_artifact(
    nonce: &[u8; NONCE_BYTES],
    sealed: &[u8],
) -> Result<Vec<u8>, EncodingError> {
    if sealed.len() < TAG_BYTES {
        return Err(EncodingError);
    }

    let mut out = Vec::with_capacity(NONCE_BYTES + sealed.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(sealed);
    Ok(out)
}

/// Encrypt under a fresh random nonce and frame the result.
pub fn seal<P: Permutation>(
    cipher: &Cipher<P>,
    key: &[u8; KEY_BYTES],
    ad: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, EncodingError> {
    let nonce = generate_nonce()?;
    let sealed = cipher.encrypt(key, &nonce, ad, plaintext);
    encode_artifact(&nonce, &sealed)
}

/// Parse and decrypt an artifact produced by [`seal`].
pub fn open<P: Permutation>(
    cipher: &Cipher<P>,
    key: &[u8; KEY_BYTES],
    ad: &[u8],
    artifact: &[u8],
) -> Result<Vec<u8>, AuthenticationFailure> {
    let parts = decode_artifact(artifact)?;
    cipher.decrypt(key, parts.nonce(), ad, parts.sealed())
}
