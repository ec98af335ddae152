#![no_main]

use ascon_pq::{Cipher, Variant, KEY_BYTES, NONCE_BYTES};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < KEY_BYTES + NONCE_BYTES + 2 {
        return;
    }

    let (key, rest) = data.split_at(KEY_BYTES);
    let (nonce, rest) = rest.split_at(NONCE_BYTES);
    let variant = if rest[0] & 1 == 0 { Variant::Ascon80pq } else { Variant::Ascon80pqWide };
    let split = rest[1] as usize % rest.len();
    let (ad, pt) = rest[2..].split_at(split.min(rest.len() - 2));

    let key: [u8; KEY_BYTES] = key.try_into().unwrap();
    let nonce: [u8; NONCE_BYTES] = nonce.try_into().unwrap();
    let cipher = Cipher::with_variant(variant);

    let ct = cipher.encrypt(&key, &nonce, ad, pt);
    assert_eq!(cipher.decrypt(&key, &nonce, ad, &ct).unwrap(), pt);
});
