//! Structured reference string generation.
//!
//! The trapdoor `α` is derived deterministically from `(seed, n)`: blake3 in
//! key-derivation mode turns them into a ChaCha20 seed, and `α` is sampled from
//! that stream. `α` lives only inside [`paramgen`] and is wiped when it goes out
//! of scope. Seeded setup is for tests and benchmarks; production parameters
//! should come from a ceremony and be loaded with
//! [`ProverParams::deserialize`](crate::ProverParams::deserialize).

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::pairing::Pairing;
use ark_ec::scalar_mul::fixed_base::FixedBase;
use ark_ec::{CurveGroup, Group};
use ark_ff::{One, PrimeField, Zero};
use ark_std::UniformRand;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use tracing::{debug, instrument};
use zeroize::Zeroize;

use crate::config::SETUP_DOMAIN;
use crate::error::{Result, VecComError};
use crate::params::{check_capacity, ProverParams, VerifierParams};

/// The secret scalar behind a parameter set. Never leaves this module.
struct Trapdoor {
    alpha: Fr,
}

impl Trapdoor {
    fn derive(seed: &[u8], n: usize) -> Self {
        let mut hasher = blake3::Hasher::new_derive_key(SETUP_DOMAIN);
        hasher.update(&(n as u64).to_le_bytes());
        hasher.update(seed);
        let mut rng_seed: [u8; 32] = *hasher.finalize().as_bytes();
        let mut rng = ChaCha20Rng::from_seed(rng_seed);
        rng_seed.zeroize();

        // zero or one would collapse every basis element onto the generator
        let alpha = loop {
            let candidate = Fr::rand(&mut rng);
            if !candidate.is_zero() && !candidate.is_one() {
                break candidate;
            }
        };
        Self { alpha }
    }

    /// `[α^1, α^2, ..., α^len]`
    fn powers(&self, len: usize) -> Vec<Fr> {
        let mut powers = Vec::with_capacity(len);
        let mut acc = self.alpha;
        for _ in 0..len {
            powers.push(acc);
            acc *= self.alpha;
        }
        acc.zeroize();
        powers
    }
}

impl Drop for Trapdoor {
    fn drop(&mut self) {
        self.alpha.zeroize();
    }
}

/// Derives prover and verifier parameters for vectors of length `n`.
///
/// Deterministic in `(seed, n)`. Fails on an empty seed, on `n == 0`, and on
/// `n` above [`MAX_N`](crate::config::MAX_N).
#[instrument(level = "info", skip(seed), fields(seed_len = seed.len()))]
pub fn paramgen(seed: &[u8], n: usize) -> Result<(ProverParams, VerifierParams)> {
    if seed.is_empty() {
        return Err(VecComError::InsufficientEntropy);
    }
    check_capacity(n)?;

    let trapdoor = Trapdoor::derive(seed, n);
    let mut powers = trapdoor.powers(2 * n);

    // windowed tables over the two generators; FixedBase::msm spreads the
    // multiplications over rayon when the `parallel` feature is on
    let scalar_bits = Fr::MODULUS_BIT_SIZE as usize;
    let g1_window = FixedBase::get_mul_window_size(2 * n);
    let g1_table = FixedBase::get_window_table(scalar_bits, g1_window, G1Projective::generator());
    let mut g1_proj = FixedBase::msm::<G1Projective>(scalar_bits, g1_window, &g1_table, &powers);
    // g1^{α^{n+1}} stays unpublished: proving relies on that slot being the identity
    g1_proj[n] = G1Projective::zero();

    let g2_window = FixedBase::get_mul_window_size(n);
    let g2_table = FixedBase::get_window_table(scalar_bits, g2_window, G2Projective::generator());
    let g2_proj = FixedBase::msm::<G2Projective>(scalar_bits, g2_window, &g2_table, &powers[..n]);

    for p in powers.iter_mut() {
        p.zeroize();
    }
    drop(trapdoor);

    let g1_generators = G1Projective::normalize_batch(&g1_proj);
    let g2_generators = G2Projective::normalize_batch(&g2_proj);

    // e(g1^{α}, g2^{α^n}) = e(g1, g2)^{α^{n+1}}
    let gt = Bls12_381::pairing(g1_generators[0], g2_generators[n - 1]);
    debug!(n, "generated structured reference string");

    Ok((
        ProverParams::new(n, g1_generators),
        VerifierParams::new(n, g2_generators, gt),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::AffineRepr;

    const SEED: &[u8] = b"This is Leo's Favourite Seed";

    #[test]
    fn test_paramgen_is_deterministic() {
        let (pp1, vp1) = paramgen(SEED, 8).unwrap();
        let (pp2, vp2) = paramgen(SEED, 8).unwrap();
        assert_eq!(pp1, pp2);
        assert_eq!(vp1, vp2);
    }

    #[test]
    fn test_generators_are_powers_of_trapdoor() {
        let n = 5;
        let (pp, vp) = paramgen(SEED, n).unwrap();
        let trapdoor = Trapdoor::derive(SEED, n);
        for (k, alpha_k) in trapdoor.powers(2 * n).into_iter().enumerate() {
            if k != n {
                assert_eq!(
                    pp.generators[k],
                    (G1Projective::generator() * alpha_k).into_affine()
                );
            }
            if k < n {
                assert_eq!(
                    vp.generators[k],
                    (G2Projective::generator() * alpha_k).into_affine()
                );
            }
        }
    }

    #[test]
    fn test_paramgen_depends_on_seed_and_n() {
        let (pp, _) = paramgen(SEED, 4).unwrap();
        let (pp_seed, _) = paramgen(b"This is Leo's Favourite Seed!", 4).unwrap();
        let (pp_n, _) = paramgen(SEED, 5).unwrap();
        assert_ne!(pp.generators[0], pp_seed.generators[0]);
        assert_ne!(pp.generators[0], pp_n.generators[0]);
    }

    #[test]
    fn test_paramgen_layout() {
        let n = 10;
        let (pp, vp) = paramgen(SEED, n).unwrap();
        assert_eq!(pp.generators.len(), 2 * n);
        assert_eq!(vp.generators.len(), n);
        assert!(pp.generators[n].is_zero());
        assert!(pp
            .generators
            .iter()
            .enumerate()
            .all(|(k, g)| k == n || !g.is_zero()));

        // e(pp[i], vp[j]) == e(g1, g2)^{α^{i+j+2}} == e(pp[i+j+1], g2) when i+j+1 != n
        let g2 = ark_bls12_381::G2Affine::generator();
        for i in 0..n {
            for j in 0..n {
                if i + j + 1 != n {
                    assert_eq!(
                        Bls12_381::pairing(pp.generators[i], vp.generators[j]),
                        Bls12_381::pairing(pp.generators[i + j + 1], g2)
                    );
                }
            }
        }
    }

    #[test]
    fn test_paramgen_rejects_empty_seed() {
        assert!(matches!(
            paramgen(b"", 4),
            Err(VecComError::InsufficientEntropy)
        ));
    }

    #[test]
    fn test_paramgen_rejects_bad_capacity() {
        assert!(matches!(
            paramgen(SEED, 0),
            Err(VecComError::InvalidParameters(_))
        ));
        assert!(matches!(
            paramgen(SEED, crate::config::MAX_N + 1),
            Err(VecComError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_single_entry_params() {
        let (pp, vp) = paramgen(SEED, 1).unwrap();
        assert_eq!(pp.generators.len(), 2);
        assert!(pp.generators[1].is_zero());
        assert!(pp.check_consistency(&vp));
    }
}
