#![no_main]

use ascon_pq::artifact::{decode_artifact, open};
use ascon_pq::{Cipher, Variant};
use libfuzzer_sys::fuzz_target;

const KEY: [u8; 20] = [0x42; 20];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let variant = if data[0] & 1 == 0 { Variant::Ascon80pq } else { Variant::Ascon80pqWide };
    let split = (data.get(1).copied().unwrap_or(0) as usize) % data.len();
    let (ad, artifact) = data[1..].split_at(split.min(data.len() - 1));

    if let Ok(parts) = decode_artifact(artifact) {
        assert_eq!(parts.sealed().len(), artifact.len() - parts.nonce().len());
    }

    // Random bytes must never authenticate under a fixed key.
    assert!(open(&Cipher::with_variant(variant), &KEY, ad, artifact).is_err());
});
