//! Pairing check for a single position.
//!
//! A proof `π` for position `i` and value `m` is accepted iff
//!
//! ```text
//! e(C, g2^{α^{n-i}}) == e(π, g2) · gt^{H(m)}
//! ```
//!
//! Exponentiating in the target group is slow, so both sides are divided by
//! `H(m)` in G1 instead and the check becomes one two-term multi-pairing:
//! `e(C^{1/h}, g2^{α^{n-i}}) · e(π^{-1/h}, g2) == gt`.

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, Zero};
use tracing::{debug, instrument};

use crate::commitment::Commitment;
use crate::error::{Result, VecComError};
use crate::hash_to_field::hash_to_field;
use crate::params::VerifierParams;
use crate::proof::Proof;

/// Checks that `proof` opens `commitment` to `value` at `proof.index()`.
///
/// Returns `Ok(false)` for a wrong value, proof or commitment, and an error
/// only when the proof's index is outside the parameters' capacity.
#[instrument(level = "debug", skip_all, fields(n = verifier_params.n, index = proof.index))]
pub fn verify<Blob: AsRef<[u8]>>(
    verifier_params: &VerifierParams,
    commitment: &Commitment,
    proof: &Proof,
    value: Blob,
) -> Result<bool> {
    VecComError::check_index(proof.index, verifier_params.n)?;
    let hash = hash_to_field(value);
    let accepted = verify_hash_inverse(verifier_params, commitment, proof, hash.inverse());
    if !accepted {
        debug!("proof rejected");
    }
    Ok(accepted)
}

/// Split out so the `H(m) == 0` branch, which the hash never produces, stays
/// testable.
pub(crate) fn verify_hash_inverse(
    verifier_params: &VerifierParams,
    commitment: &Commitment,
    proof: &Proof,
    hash_inverse: Option<Fr>,
) -> bool {
    let n = verifier_params.n;
    let g2_index = verifier_params.generators[n - proof.index - 1];
    let com = commitment.commit.into_group();
    let neg_proof = -proof.proof.into_group();

    match hash_inverse {
        Some(h_inverse) => {
            let g1_terms =
                G1Projective::normalize_batch(&[com * h_inverse, neg_proof * h_inverse]);
            Bls12_381::multi_pairing(g1_terms, [g2_index, G2Affine::generator()])
                == verifier_params.gt
        }
        None => {
            let g1_terms = G1Projective::normalize_batch(&[com, neg_proof]);
            Bls12_381::multi_pairing(g1_terms, [g2_index, G2Affine::generator()]).is_zero()
        }
    }
}
