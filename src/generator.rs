use log::trace;
use rand::seq::{ IndexedRandom, SliceRandom };
use rand::{ CryptoRng, Rng };

use crate::errors::EmptyAlphabetError;

pub fn generate<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
    pools: &[String],
) -> Result<String, EmptyAlphabetError> {
    if alphabet.is_empty() {
        return Err(EmptyAlphabetError::new(String::from(
            "no character classes enabled",
        )));
    }

    trace!("generating {} characters from an alphabet of {}", length, alphabet.len());

    let alphabet: Vec<char> = alphabet.chars().collect();
    let mut password: Vec<char> = Vec::with_capacity(length);

    // One character from every pool, but only when the requested length has
    // room for all of them. Shorter requests skip the seeding entirely.
    if length >= pools.len() {
        for pool in pools {
            let pool: Vec<char> = pool.chars().collect();
            if let Some(c) = pool.choose(rng) {
                password.push(*c);
            }
        }
    }

    while password.len() < length {
        password.push(*alphabet.choose(rng).unwrap());
    }

    // Full-buffer shuffle, so the seeded class characters do not cluster at
    // the front in class order.
    password.shuffle(rng);

    Ok(password.into_iter().collect())
}
