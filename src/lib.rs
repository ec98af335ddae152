//! # ascon-pq
//!
//! Ascon-80pq authenticated encryption with associated data: a 160-bit key,
//! a 128-bit nonce and a 128-bit tag over the 320-bit Ascon permutation.
//!
//! ## Quick Start
//!
//! ```rust
//! use ascon_pq::{decrypt, encrypt};
//!
//! let key = [0x11u8; 20];
//! let nonce = [0x22u8; 16]; // must never repeat under the same key
//!
//! let ct = encrypt(&key, &nonce, b"header", b"secret");
//! assert_eq!(ct.len(), b"secret".len() + ascon_pq::TAG_BYTES);
//!
//! let pt = decrypt(&key, &nonce, b"header", &ct).unwrap();
//! assert_eq!(pt, b"secret");
//! ```
//!
//! ## Security Properties
//!
//! - **Uniform errors**: every decryption failure is [`AuthenticationFailure`]
//! - **Release after verify**: no plaintext leaves `decrypt` unless the tag
//!   matches; the speculative buffer is zeroized otherwise
//! - **No secret-dependent branches**: partial blocks use length masks, the
//!   tag check reduces to one `subtle` decision
//! - **Scrubbed internals**: expanded key and sponge state wipe on drop
//!
//! ## What's NOT Provided
//!
//! - Key derivation or management
//! - Nonce-misuse resistance
//! - Streaming encryption

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod cipher;
mod compat;
mod error;
mod key;
mod permutation;
mod sponge;
mod state;
mod variant;

// Artifact framing is used by the CLI and fuzz target
pub mod artifact;

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Secret key size.
pub const KEY_BYTES: usize = 20;
/// Public nonce size.
pub const NONCE_BYTES: usize = 16;
/// Authentication tag size.
pub const TAG_BYTES: usize = 16;
/// Words in the permutation state (5 x 64 = 320 bits).
pub const STATE_WORDS: usize = 5;

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

pub use cipher::{decrypt, encrypt, Cipher};
pub use compat::Ascon80pq;
pub use error::{AuthenticationFailure, EncodingError};
pub use key::SecretKey;
pub use permutation::{AsconPermutation, Permutation, Rounds};
pub use variant::{UnknownVariant, Variant};

/// RustCrypto traits, re-exported for `Ascon80pq` users.
pub use aead;
