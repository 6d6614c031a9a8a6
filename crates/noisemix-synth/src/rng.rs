//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All sampling randomness flows through this module. The clean and noise
//! pools draw from independent streams derived from one base seed, so a
//! seeded run reproduces the same corpus byte for byte.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Derives a seed for a named sampling stream from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the stream key,
/// producing an independent seed per stream.
pub fn derive_stream_seed(base_seed: u64, key: &str) -> u64 {
    let mut input = Vec::with_capacity(8 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 8] = hash.as_bytes()[0..8].try_into().unwrap();
    u64::from_le_bytes(bytes)
}

/// Creates an RNG for a named sampling stream.
pub fn create_stream_rng(base_seed: u64, key: &str) -> Pcg32 {
    create_rng(derive_stream_seed(base_seed, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<u32> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<u32> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_stream_seed_derivation_consistency() {
        let seed_a = derive_stream_seed(42, "clean");
        let seed_b = derive_stream_seed(42, "clean");
        assert_eq!(seed_a, seed_b);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut clean_rng = create_stream_rng(42, "clean");
        let mut noise_rng = create_stream_rng(42, "noise");

        let clean_values: Vec<u32> = (0..10).map(|_| clean_rng.gen()).collect();
        let noise_values: Vec<u32> = (0..10).map(|_| noise_rng.gen()).collect();

        assert_ne!(clean_values, noise_values);
    }

    #[test]
    fn test_different_base_seeds_differ() {
        assert_ne!(
            derive_stream_seed(42, "clean"),
            derive_stream_seed(43, "clean")
        );
    }
}
