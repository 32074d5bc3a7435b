#![cfg(feature = "rand-core")]

use rand::{Rng, RngCore};
use sha1prng::Sha1Prng;

#[test]
fn next_u32_is_thirty_two_bit_draw() {
    let mut a = Sha1Prng::from_seed(b"seed");
    let mut b = Sha1Prng::from_seed(b"seed");
    for _ in 0..10 {
        assert_eq!(a.next_u32(), b.next(32).unwrap());
    }
}

#[test]
fn next_u64_borrows_for_negative_low_word() {
    let mut prng = Sha1Prng::from_seed(b"seed");
    assert_eq!(prng.next_u64(), 4330773292752074897);
    assert_eq!(prng.next_u64(), 17129775326971483620);
    // low word 0x9f38_df9b is negative as i32
    assert_eq!(prng.next_u64(), 6552567641783459739);
}

#[test]
fn fill_bytes_follows_stream() {
    let mut a = Sha1Prng::from_seed(b"abc");
    let mut b = Sha1Prng::from_seed(b"abc");
    let mut via_rand = [0u8; 37];
    let mut direct = [0u8; 37];
    a.fill_bytes(&mut via_rand);
    b.next_bytes(&mut direct).unwrap();
    assert_eq!(via_rand, direct);
}

#[test]
fn try_fill_bytes_reports_unseeded() {
    let mut prng = Sha1Prng::unseeded();
    let err = prng.try_fill_bytes(&mut [0u8; 4]).unwrap_err();
    assert!(err.to_string().contains("not been seeded"));
}

#[test]
#[should_panic(expected = "not been seeded")]
fn fill_bytes_panics_when_unseeded() {
    let mut prng = Sha1Prng::unseeded();
    prng.fill_bytes(&mut [0u8; 4]);
}

#[test]
fn rand_helpers_layer_on_top() {
    let mut prng = Sha1Prng::from_seed(b"helpers");
    for _ in 0..500 {
        let roll: u8 = prng.gen_range(1..=6);
        assert!((1..=6).contains(&roll));
        let unit: f64 = prng.gen();
        assert!((0.0..1.0).contains(&unit));
    }
    let heads = (0..1000).filter(|_| prng.gen_bool(0.5)).count();
    assert!(heads > 0 && heads < 1000);
}
