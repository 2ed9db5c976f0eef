#![feature(test)]

extern crate test;

use base32_variants::{encode_rfc4648, encoded_len, Variant, RFC4648, ZBASE32};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rand_core::RngCore;
use test::Bencher;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    bytes
}

macro_rules! bench_encode_buffer {
    ($name:ident, $len:expr) => {
        #[bench]
        fn $name(b: &mut Bencher) {
            let src = random_bytes($len);
            let mut dst = vec![0u8; encoded_len($len)];
            b.bytes = $len;

            b.iter(|| {
                let res = RFC4648.encode(&src, &mut dst).unwrap().len();
                test::black_box(res);
            });
        }
    };
}

bench_encode_buffer!(bench_rfc4648_encode_20, 20);
bench_encode_buffer!(bench_rfc4648_encode_1k, 1024);
bench_encode_buffer!(bench_rfc4648_encode_64k, 64 * 1024);

#[bench]
fn bench_rfc4648_encode_string_1k(b: &mut Bencher) {
    let src = random_bytes(1024);
    b.bytes = 1024;

    b.iter(|| {
        let res = encode_rfc4648(Some(src.as_slice())).unwrap();
        test::black_box(res);
    });
}

#[bench]
fn bench_zbase32_encode_string_1k(b: &mut Bencher) {
    let src = random_bytes(1024);
    b.bytes = 1024;

    b.iter(|| {
        let res = ZBASE32.encode_string(&src);
        test::black_box(res);
    });
}

#[bench]
fn bench_all_variants_encode_1k(b: &mut Bencher) {
    let src = random_bytes(1024);
    b.bytes = 1024 * Variant::ALL.len() as u64;

    b.iter(|| {
        for variant in Variant::ALL {
            let res = variant.encode(Some(src.as_slice())).unwrap();
            test::black_box(res);
        }
    });
}
