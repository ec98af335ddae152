use ascon_pq::aead::{Aead, AeadInPlace, KeyInit, Nonce, Payload};
use ascon_pq::{AuthenticationFailure, Ascon80pq, Cipher, SecretKey, Variant, TAG_BYTES};

const KEY: [u8; 20] = [0x0f; 20];
const NONCE: [u8; 16] = [0xf0; 16];

fn setup(variant: Variant) -> (Cipher, [u8; 20], [u8; 16]) {
    (Cipher::with_variant(variant), KEY, NONCE)
}

/// Every block-boundary edge: empty, one byte, rate-1, rate, rate+1, 10*rate+3.
fn boundary_lengths(rate: usize) -> [usize; 6] {
    [0, 1, rate - 1, rate, rate + 1, 10 * rate + 3]
}

#[test]
fn roundtrip_basic() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let plaintext = b"hello post-quantum world";
    let ad = b"test-ad";

    let ct = cit.encrypt(&key, &nonce, ad, plaintext);
    let pt = cit.decrypt(&key, &nonce, ad, &ct).unwrap();
    assert_eq!(&pt, plaintext);
}

#[test]
fn roundtrip_block_boundaries() {
    for variant in Variant::ALL {
        let (cit, key, nonce) = setup(variant);
        for pt_len in boundary_lengths(variant.rate()) {
            for ad_len in boundary_lengths(variant.rate()) {
                let pt: Vec<u8> = (0..pt_len).map(|i| (i * 7) as u8).collect();
                let ad: Vec<u8> = (0..ad_len).map(|i| (i * 13) as u8).collect();

                let ct = cit.encrypt(&key, &nonce, &ad, &pt);
                assert_eq!(ct.len(), pt_len + TAG_BYTES, "{variant} pt={pt_len}");
                let back = cit.decrypt(&key, &nonce, &ad, &ct).unwrap();
                assert_eq!(back, pt, "{variant} pt={pt_len} ad={ad_len}");
            }
        }
    }
}

#[test]
fn roundtrip_empty_plaintext() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"ad", b"");
    assert_eq!(ct.len(), TAG_BYTES);
    let pt = cit.decrypt(&key, &nonce, b"ad", &ct).unwrap();
    assert_eq!(pt, b"");
}

#[test]
fn roundtrip_large_plaintext() {
    let (cit, key, nonce) = setup(Variant::Ascon80pqWide);
    let plaintext = vec![0xABu8; 65536 + 5];
    let ct = cit.encrypt(&key, &nonce, b"ad", &plaintext);
    let pt = cit.decrypt(&key, &nonce, b"ad", &ct).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn encrypt_is_deterministic() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let a = cit.encrypt(&key, &nonce, b"ad", b"same input");
    let b = cit.encrypt(&key, &nonce, b"ad", b"same input");
    assert_eq!(a, b);
}

#[test]
fn empty_ad_differs_from_nonempty_ad() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let a = cit.encrypt(&key, &nonce, b"", b"data");
    let b = cit.encrypt(&key, &nonce, &[0u8], b"data");
    assert_ne!(a, b);
}

#[test]
fn wrong_ad_fails() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"good-ad", b"data");
    assert_eq!(cit.decrypt(&key, &nonce, b"bad-ad", &ct), Err(AuthenticationFailure));
}

#[test]
fn wrong_nonce_fails() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"ad", b"data");
    let mut other = nonce;
    other[15] ^= 0x01;
    assert_eq!(cit.decrypt(&key, &other, b"ad", &ct), Err(AuthenticationFailure));
}

#[test]
fn wrong_key_fails() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"ad", b"data");
    for byte in [0, 3, 4, 19] {
        let mut other = key;
        other[byte] ^= 0x80;
        assert_eq!(cit.decrypt(&other, &nonce, b"ad", &ct), Err(AuthenticationFailure), "key byte {byte}");
    }
}

#[test]
fn every_bit_flip_is_detected() {
    for variant in Variant::ALL {
        let (cit, key, nonce) = setup(variant);
        let ad = b"associated";
        let ct = cit.encrypt(&key, &nonce, ad, b"twenty-one byte msg!!");

        for i in 0..ct.len() {
            for bit in 0..8 {
                let mut tampered = ct.clone();
                tampered[i] ^= 1 << bit;
                assert_eq!(
                    cit.decrypt(&key, &nonce, ad, &tampered),
                    Err(AuthenticationFailure),
                    "{variant} byte {i} bit {bit}"
                );
            }
        }

        for i in 0..ad.len() {
            let mut bad_ad = *ad;
            bad_ad[i] ^= 0x01;
            assert!(cit.decrypt(&key, &nonce, &bad_ad, &ct).is_err());
        }
    }
}

#[test]
fn truncated_fails() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"ad", b"data");
    assert_eq!(cit.decrypt(&key, &nonce, b"ad", &ct[..ct.len() - 1]), Err(AuthenticationFailure));
    assert_eq!(cit.decrypt(&key, &nonce, b"ad", &ct[..TAG_BYTES - 1]), Err(AuthenticationFailure));
    assert_eq!(cit.decrypt(&key, &nonce, b"ad", b""), Err(AuthenticationFailure));
}

#[test]
fn all_errors_are_uniform() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let ct = cit.encrypt(&key, &nonce, b"ad", b"data");

    let err1 = cit.decrypt(&key, &nonce, b"bad", &ct).unwrap_err();
    let err2 = cit.decrypt(&key, &nonce, b"ad", b"short").unwrap_err();
    let mut tampered = ct.clone();
    tampered[0] ^= 0x01;
    let err3 = cit.decrypt(&key, &nonce, b"ad", &tampered).unwrap_err();

    assert_eq!(err1, err2);
    assert_eq!(err2, err3);
    assert_eq!(format!("{}", err1), "authentication failed");
}

#[test]
fn failed_in_place_decrypt_wipes_buffer() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let mut buf = b"plaintext that must not leak".to_vec();
    let mut tag = cit.encrypt_in_place_detached(&key, &nonce, b"ad", &mut buf);
    tag[0] ^= 0x01;

    let result = cit.decrypt_in_place_detached(&key, &nonce, b"ad", &mut buf, &tag);
    assert_eq!(result, Err(AuthenticationFailure));
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn detached_matches_attached() {
    let (cit, key, nonce) = setup(Variant::Ascon80pq);
    let pt = b"detached and attached agree";
    let attached = cit.encrypt(&key, &nonce, b"ad", pt);

    let mut buf = pt.to_vec();
    let tag = cit.encrypt_in_place_detached(&key, &nonce, b"ad", &mut buf);
    assert_eq!(&attached[..pt.len()], &buf[..]);
    assert_eq!(&attached[pt.len()..], &tag[..]);

    cit.decrypt_in_place_detached(&key, &nonce, b"ad", &mut buf, &tag).unwrap();
    assert_eq!(&buf, pt);
}

#[test]
fn free_functions_use_standard_variant() {
    let ct = ascon_pq::encrypt(&KEY, &NONCE, b"ad", b"data");
    assert_eq!(ct, Cipher::with_variant(Variant::Ascon80pq).encrypt(&KEY, &NONCE, b"ad", b"data"));
    assert_eq!(ascon_pq::decrypt(&KEY, &NONCE, b"ad", &ct).unwrap(), b"data");
}

// ---------------------------------------------------------------------------
// RustCrypto trait surface
// ---------------------------------------------------------------------------

#[test]
fn aead_trait_matches_cipher() {
    let aead = Ascon80pq::new(&KEY.into());
    let nonce: Nonce<Ascon80pq> = NONCE.into();

    let ct = aead.encrypt(&nonce, Payload { msg: b"data", aad: b"ad" }).unwrap();
    assert_eq!(ct, Cipher::new().encrypt(&KEY, &NONCE, b"ad", b"data"));

    let pt = aead.decrypt(&nonce, Payload { msg: &ct, aad: b"ad" }).unwrap();
    assert_eq!(pt, b"data");

    assert!(aead.decrypt(&nonce, Payload { msg: &ct, aad: b"other" }).is_err());
}

#[test]
fn aead_trait_in_place_with_variant() {
    let aead = Ascon80pq::with_variant(SecretKey::new(KEY), Variant::Ascon80pqWide);
    assert_eq!(aead.variant(), Variant::Ascon80pqWide);

    let mut buf = b"seventeen bytes!!".to_vec();
    let tag = aead.encrypt_in_place_detached(&NONCE.into(), b"ad", &mut buf).unwrap();
    let expected = Cipher::with_variant(Variant::Ascon80pqWide).encrypt(&KEY, &NONCE, b"ad", b"seventeen bytes!!");
    assert_eq!(&expected[..17], &buf[..]);
    assert_eq!(&expected[17..], tag.as_slice());

    aead.decrypt_in_place_detached(&NONCE.into(), b"ad", &mut buf, &tag).unwrap();
    assert_eq!(&buf, b"seventeen bytes!!");
}
