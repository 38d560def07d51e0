//! Position proofs (witnesses) and their constant-time update.
//!
//! The proof for position `i` is
//!
//! ```text
//! π_i = Π_{j != i} generators[j + n - i]^{H(v_j)}
//! ```
//!
//! Taking the whole window `generators[n - i .. 2n - i]` gives the same value,
//! because the term for `j = i` lands on `generators[n]`, the identity.

use ark_bls12_381::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use subtle::{Choice, ConstantTimeEq};
use tracing::instrument;

use crate::codec::{decode_g1, encode_g1, PointBytes};
use crate::commitment::Commitment;
use crate::error::{Result, VecComError};
use crate::hash_to_field::{hash_all, update_delta};
use crate::params::{ProverParams, VerifierParams};
use crate::verifier;

/// Evidence that one position of a committed vector holds a given value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub(crate) proof: G1Affine,
    pub(crate) index: usize,
}

fn window(prover_params: &ProverParams, index: usize) -> &[G1Affine] {
    let n = prover_params.n;
    &prover_params.generators[n - index..2 * n - index]
}

impl Proof {
    /// Proves that position `index` of `values` holds `values[index]`.
    #[instrument(level = "debug", skip(prover_params, values), fields(n = prover_params.n))]
    pub fn new<Blob: AsRef<[u8]>>(
        prover_params: &ProverParams,
        values: &[Blob],
        index: usize,
    ) -> Result<Self> {
        VecComError::check_index(index, prover_params.n)?;
        prover_params.check_len(values.len())?;
        let scalars = hash_all(values);
        let proof = G1Projective::msm(window(prover_params, index), &scalars).map_err(|got| {
            VecComError::CapacityMismatch {
                expected: prover_params.n,
                got,
            }
        })?;
        Ok(Self {
            proof: proof.into_affine(),
            index,
        })
    }

    /// Position this proof opens.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the proof for the same position after position
    /// `changed_index` moved from `value_before` to `value_after`.
    ///
    /// A proof never depends on the value at its own position, so a change at
    /// `changed_index == self.index()` returns the proof unchanged.
    pub fn update<Blob: AsRef<[u8]>>(
        &self,
        prover_params: &ProverParams,
        changed_index: usize,
        value_before: Blob,
        value_after: Blob,
    ) -> Result<Self> {
        let n = prover_params.n;
        VecComError::check_index(self.index, n)?;
        VecComError::check_index(changed_index, n)?;
        if changed_index == self.index {
            return Ok(*self);
        }

        let multiplier = update_delta(value_before, value_after);
        let param = prover_params.generators[changed_index + n - self.index];
        let proof = self.proof.into_group() + param * multiplier;
        Ok(Self {
            proof: proof.into_affine(),
            index: self.index,
        })
    }

    /// Checks this proof against `commitment` for `value`.
    pub fn verify<Blob: AsRef<[u8]>>(
        &self,
        verifier_params: &VerifierParams,
        commitment: &Commitment,
        value: Blob,
    ) -> Result<bool> {
        verifier::verify(verifier_params, commitment, self, value)
    }

    /// Canonical 48-byte form of the group element. The index travels
    /// separately.
    pub fn to_bytes(&self) -> PointBytes {
        encode_g1(&self.proof)
    }

    /// Rebuilds a proof for position `index` from its 48-byte form.
    pub fn from_bytes(bytes: &[u8], index: usize) -> Result<Self> {
        Ok(Self {
            proof: decode_g1(bytes)?,
            index,
        })
    }
}

impl ConstantTimeEq for Proof {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
            & (self.index as u64).ct_eq(&(other.index as u64))
    }
}

/// Proves every position of `values` at once, hashing each value a single
/// time. With the `parallel` feature the positions are spread over the rayon
/// pool.
#[instrument(level = "debug", skip_all, fields(n = prover_params.n))]
pub fn prove_all<Blob: AsRef<[u8]>>(
    prover_params: &ProverParams,
    values: &[Blob],
) -> Result<Vec<Proof>> {
    let n = prover_params.n;
    prover_params.check_len(values.len())?;
    let scalars = hash_all(values);

    let prove_one = |index: usize| G1Projective::msm_unchecked(window(prover_params, index), &scalars);
    #[cfg(feature = "parallel")]
    let projective: Vec<G1Projective> = (0..n).into_par_iter().map(prove_one).collect();
    #[cfg(not(feature = "parallel"))]
    let projective: Vec<G1Projective> = (0..n).map(prove_one).collect();

    Ok(G1Projective::normalize_batch(&projective)
        .into_iter()
        .enumerate()
        .map(|(index, proof)| Proof { proof, index })
        .collect())
}
