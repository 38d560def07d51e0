use ark_bls12_381::{G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use subtle::{Choice, ConstantTimeEq};
use tracing::instrument;

use crate::codec::{decode_g1, encode_g1, PointBytes};
use crate::error::{Result, VecComError};
use crate::hash_to_field::{hash_all, update_delta};
use crate::params::ProverParams;

/// A commitment to a whole vector: one G1 element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment {
    pub(crate) commit: G1Affine,
}

impl Commitment {
    /// Commits to `values`, which must have exactly `pp.n()` entries.
    ///
    /// `C = Π generators[i]^{H(values[i])}`
    #[instrument(level = "debug", skip_all, fields(n = prover_params.n))]
    pub fn new<Blob: AsRef<[u8]>>(prover_params: &ProverParams, values: &[Blob]) -> Result<Self> {
        prover_params.check_len(values.len())?;
        let scalars = hash_all(values);
        let n = prover_params.n;
        let commit = G1Projective::msm(&prover_params.generators[..n], &scalars).map_err(
            |got| VecComError::CapacityMismatch { expected: n, got },
        )?;
        Ok(Self {
            commit: commit.into_affine(),
        })
    }

    /// Returns the commitment to the vector in which position `changed_index`
    /// holds `value_after` instead of `value_before`. The other entries are
    /// not needed; `self` is left untouched.
    pub fn update<Blob: AsRef<[u8]>>(
        &self,
        prover_params: &ProverParams,
        changed_index: usize,
        value_before: Blob,
        value_after: Blob,
    ) -> Result<Self> {
        VecComError::check_index(changed_index, prover_params.n)?;
        let multiplier = update_delta(value_before, value_after);
        let commit =
            self.commit.into_group() + prover_params.generators[changed_index] * multiplier;
        Ok(Self {
            commit: commit.into_affine(),
        })
    }

    /// Canonical 48-byte form.
    pub fn to_bytes(&self) -> PointBytes {
        encode_g1(&self.commit)
    }

    /// Parses a canonical 48-byte commitment; fails with
    /// [`VecComError::BadEncoding`] on anything else.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            commit: decode_g1(bytes)?,
        })
    }
}

impl ConstantTimeEq for Commitment {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}
