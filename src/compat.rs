//! RustCrypto `aead` trait integration.
//!
//! `Ascon80pq` binds a key to a [`Cipher`] so the crate can be used wherever
//! an `aead::Aead` / `aead::AeadInPlace` implementation is expected.

use aead::consts::{U0, U16, U20};
use aead::{AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag};

use crate::cipher::Cipher;
use crate::key::SecretKey;
use crate::variant::Variant;
use crate::{KEY_BYTES, NONCE_BYTES, TAG_BYTES};

/// Keyed Ascon-80pq instance.
#[derive(Clone, Debug)]
pub struct Ascon80pq {
    key: SecretKey,
    cipher: Cipher,
}

impl Ascon80pq {
    pub fn with_variant(key: SecretKey, variant: Variant) -> Self {
        Self {
            key,
            cipher: Cipher::with_variant(variant),
        }
    }

    pub fn variant(&self) -> Variant {
        self.cipher.variant()
    }
}

impl KeySizeUser for Ascon80pq {
    type KeySize = U20;
}

impl KeyInit for Ascon80pq {
    fn new(key: &Key<Self>) -> Self {
        let mut raw = [0u8; KEY_BYTES];
        raw.copy_from_slice(key);
        Self::with_variant(SecretKey::new(raw), Variant::Ascon80pq)
    }
}

impl AeadCore for Ascon80pq {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Ascon80pq {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let tag = self.cipher.encrypt_in_place_detached(
            self.key.as_bytes(),
            &nonce_array(nonce),
            associated_data,
            buffer,
        );
        Ok(Tag::<Self>::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let mut expected = [0u8; TAG_BYTES];
        expected.copy_from_slice(tag);
        self.cipher
            .decrypt_in_place_detached(
                self.key.as_bytes(),
                &nonce_array(nonce),
                associated_data,
                buffer,
                &expected,
            )
            .map_err(aead::Error::from)
    }
}

fn nonce_array(nonce: &Nonce<Ascon80pq>) -> [u8; NONCE_BYTES] {
    let mut out = [0u8; NONCE_BYTES];
    out.copy_from_slice(nonce);
    out
}
