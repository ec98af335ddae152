//! Property-based tests for the AEAD surface.

use proptest::prelude::*;

use ascon_pq::{Cipher, Variant, TAG_BYTES};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Ascon80pq), Just(Variant::Ascon80pqWide)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// decrypt(encrypt(m)) == m for any key, nonce, AD and message
    #[test]
    fn roundtrip(
        variant in variant(),
        key in any::<[u8; 20]>(),
        nonce in any::<[u8; 16]>(),
        ad in prop::collection::vec(any::<u8>(), 0..70),
        pt in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let cipher = Cipher::with_variant(variant);
        let ct = cipher.encrypt(&key, &nonce, &ad, &pt);
        prop_assert_eq!(ct.len(), pt.len() + TAG_BYTES);
        prop_assert_eq!(cipher.decrypt(&key, &nonce, &ad, &ct).unwrap(), pt);
    }

    /// Flipping any single bit of ciphertext or tag is rejected
    #[test]
    fn single_bit_tamper_rejected(
        variant in variant(),
        key in any::<[u8; 20]>(),
        nonce in any::<[u8; 16]>(),
        pt in prop::collection::vec(any::<u8>(), 0..64),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let cipher = Cipher::with_variant(variant);
        let mut ct = cipher.encrypt(&key, &nonce, b"ad", &pt);
        let i = pos.index(ct.len());
        ct[i] ^= 1 << bit;
        prop_assert!(cipher.decrypt(&key, &nonce, b"ad", &ct).is_err());
    }

    /// A prefix of the message encrypts to a prefix of the ciphertext
    #[test]
    fn ciphertext_is_online(
        variant in variant(),
        key in any::<[u8; 20]>(),
        nonce in any::<[u8; 16]>(),
        pt in prop::collection::vec(any::<u8>(), 1..100),
        cut in any::<prop::sample::Index>(),
    ) {
        let cipher = Cipher::with_variant(variant);
        let n = cut.index(pt.len());
        let full = cipher.encrypt(&key, &nonce, b"", &pt);
        let prefix = cipher.encrypt(&key, &nonce, b"", &pt[..n]);
        prop_assert_eq!(&full[..n], &prefix[..n]);
    }

    /// Changing the nonce changes the tag
    #[test]
    fn nonce_changes_output(
        key in any::<[u8; 20]>(),
        a in any::<[u8; 16]>(),
        b in any::<[u8; 16]>(),
    ) {
        prop_assume!(a != b);
        let cipher = Cipher::new();
        prop_assert_ne!(
            cipher.encrypt(&key, &a, b"", b""),
            cipher.encrypt(&key, &b, b"", b"")
        );
    }

    /// Inputs shorter than a tag never decrypt
    #[test]
    fn short_inputs_rejected(
        key in any::<[u8; 20]>(),
        nonce in any::<[u8; 16]>(),
        ct in prop::collection::vec(any::<u8>(), 0..TAG_BYTES),
    ) {
        prop_assert!(Cipher::new().decrypt(&key, &nonce, b"", &ct).is_err());
    }
}
