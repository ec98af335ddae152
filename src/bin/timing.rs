use std::hint::black_box;
use std::time::Instant;

use ascon_pq::{Cipher, TAG_BYTES};

fn time_it<F: FnMut()>(label: &str, iters: usize, mut f: F) {
    for _ in 0..(iters / 10).max(10) {
        f();
    }

    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / (iters as u32);

    println!("{:<20} total={:?}  per_iter={:?}", label, elapsed, per_iter);
}

/// Copy of `ct` whose tag agrees with the real one in exactly `prefix`
/// leading bytes.
fn with_tag_prefix(ct: &[u8], prefix: usize) -> Vec<u8> {
    let mut out = ct.to_vec();
    let tag_start = out.len() - TAG_BYTES;
    out[tag_start + prefix] ^= 0x01;
    out
}

fn main() {
    let cipher = Cipher::new();
    let key = [0x42u8; 20];
    let nonce = [0x24u8; 16];

    let plaintext = vec![0x42u8; 1024];
    let aad_good = b"aad-good";
    let aad_bad = b"aad-bad";

    let ct = cipher.encrypt(&key, &nonce, aad_good, &plaintext);

    let iters = 20_000;

    time_it("valid", iters, || {
        let r = cipher.decrypt(&key, black_box(&nonce), black_box(aad_good), black_box(&ct));
        black_box(r.ok());
    });

    for prefix in [0, 8, TAG_BYTES - 1] {
        let tampered = with_tag_prefix(&ct, prefix);
        time_it(&format!("tag_prefix_{prefix}"), iters, || {
            let r = cipher.decrypt(&key, black_box(&nonce), black_box(aad_good), black_box(&tampered));
            black_box(r.err());
        });
    }

    time_it("wrong_aad", iters, || {
        let r = cipher.decrypt(&key, black_box(&nonce), black_box(aad_bad), black_box(&ct));
        black_box(r.err());
    });

    time_it("short", iters, || {
        let r = cipher.decrypt(&key, black_box(&nonce), black_box(aad_good), black_box(b"short"));
        black_box(r.err());
    });

    println!("\nDone.");
}
