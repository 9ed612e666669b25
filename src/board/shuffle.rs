//! Seeded shuffling for random boards.
//!
//! A seed string keys an MT19937 generator through `init_by_array`. The key
//! is the big-endian integer formed by the seed's UTF-8 bytes followed by
//! their SHA-512 digest, split into 32-bit words least significant first.
//! Shuffles are Fisher-Yates from the back, each index drawn by rejection
//! sampling on the top bits of one 32-bit output. A given seed deals the
//! same board on every platform and dependency version.

use rand::RngCore;
use rand_mt::Mt;
use sha2::{Digest, Sha512};

/// Builds the generator for `seed`.
pub fn seeded_rng(seed: &str) -> Mt {
    Mt::new_with_key(seed_key(seed))
}

fn seed_key(seed: &str) -> Vec<u32> {
    let mut bytes = seed.as_bytes().to_vec();
    bytes.extend_from_slice(&Sha512::digest(seed.as_bytes()));

    // Leading zero bytes carry no value in the integer.
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let mut key: Vec<u32> = bytes[start..]
        .rchunks(4)
        .map(|word| word.iter().fold(0, |acc, &b| (acc << 8) | u32::from(b)))
        .collect();
    if key.is_empty() {
        key.push(0);
    }
    key
}

/// Uniform integer in `0..n`. `n` must be non-zero.
fn below<R: RngCore + ?Sized>(rng: &mut R, n: u32) -> u32 {
    let bits = u32::BITS - n.leading_zeros();
    loop {
        let r = rng.next_u32() >> (u32::BITS - bits);
        if r < n {
            return r;
        }
    }
}

/// Shuffles `items` in place.
pub fn shuffle<T, R: RngCore + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = below(rng, (i + 1) as u32) as usize;
        items.swap(i, j);
    }
}
