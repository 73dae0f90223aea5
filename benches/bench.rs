#![feature(test)]

extern crate test;

use knotnum::{gcd, BigInt};
use test::Bencher;

fn operands(limbs: usize) -> (BigInt, BigInt) {
    let a = BigInt::from_limbs(false, (0..limbs as u16).map(|i| i.wrapping_mul(40503) | 1).collect());
    let b = BigInt::from_limbs(true, (0..limbs as u16 / 2).map(|i| i.wrapping_mul(9973) ^ 0x8001).collect());
    (a, b)
}

fn input_text() -> String {
    let (a, b) = operands(64);
    let mut text = String::new();
    for i in 0..100 {
        let x = &(&a * &BigInt::from(i)) + &b;
        text.push_str(&x.to_string());
        text.push('\n');
    }
    text
}

#[bench]
fn bench_add(b: &mut Bencher) {
    let (x, y) = operands(256);
    b.iter(|| &x + &y);
}

#[bench]
fn bench_mul(b: &mut Bencher) {
    let (x, y) = operands(64);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_div_knuth(b: &mut Bencher) {
    let (x, y) = operands(64);
    let x = &x * &x;
    b.iter(|| x.div_rem(&y).unwrap());
}

#[bench]
fn bench_div_short(b: &mut Bencher) {
    let (x, _) = operands(64);
    let y = BigInt::from(65521);
    b.iter(|| &x / &y);
}

#[bench]
fn bench_gcd(b: &mut Bencher) {
    let (x, y) = operands(16);
    b.iter(|| gcd(&x, &y));
}

#[bench]
fn bench_to_string(b: &mut Bencher) {
    let (x, _) = operands(32);
    b.iter(|| x.to_string());
}

#[bench]
fn bench_parse_stream(b: &mut Bencher) {
    let text = input_text();
    b.bytes = text.len() as u64;
    b.iter(|| {
        knotnum::Deserializer::from_str(&text)
            .into_iter()
            .map(Result::unwrap)
            .count()
    });
}
