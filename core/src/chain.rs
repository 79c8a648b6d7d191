use std::collections::HashSet;

use rand::Rng;

use crate::{hash::hash, reduce::reduce, ALPHABET};

/// Draws a random seed word of `length` characters from the alphabet.
///
/// The random source is owned by the caller, so two runs seeded
/// identically generate the same passwords.
pub fn generate_password(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Walks a full chain from `seed`, alternating hash and reduce steps.
///
/// Returns the final word of the chain along with every word seen on the
/// way, seed included. The reduction position runs from 1 for the first
/// step up to `chain_length - 1` for the last; lookups replay the exact
/// same indexing.
pub fn walk_chain(seed: &str, chain_length: u64) -> (String, HashSet<String>) {
    let mut visited = HashSet::new();
    let mut word = seed.to_owned();
    visited.insert(word.clone());

    for position in 1..chain_length {
        word = reduce(&hash(&word), position);
        visited.insert(word.clone());
    }

    (word, visited)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::{generate_password, walk_chain};
    use crate::ALPHABET;

    #[test]
    fn test_generate_password() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        for length in [1, 3, 8] {
            let password = generate_password(&mut rng, length);
            assert_eq!(length, password.len());
            assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_password_is_reproducible() {
        let mut first = ChaCha20Rng::seed_from_u64(7);
        let mut second = ChaCha20Rng::seed_from_u64(7);

        assert_eq!(
            generate_password(&mut first, 6),
            generate_password(&mut second, 6)
        );
    }

    #[test]
    fn test_walk_single_step_chain() {
        let (endpoint, visited) = walk_chain("a", 2);

        assert_eq!("oxiqd", endpoint);
        assert_eq!(2, visited.len());
        assert!(visited.contains("a"));
        assert!(visited.contains("oxiqd"));
    }

    #[test]
    fn test_walk_chain_visits_every_column() {
        let (endpoint, visited) = walk_chain("cat", 4);

        assert_eq!("vjuqw", endpoint);
        for word in ["cat", "odmmq", "kiqhy", "vjuqw"] {
            assert!(visited.contains(word));
        }
        assert_eq!(4, visited.len());
    }

    #[test]
    fn test_degenerate_chain_is_its_seed() {
        let (endpoint, visited) = walk_chain("dog", 1);

        assert_eq!("dog", endpoint);
        assert_eq!(1, visited.len());
    }
}
