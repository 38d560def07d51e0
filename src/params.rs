//! Prover and verifier parameter bundles.
//!
//! With trapdoor `α` and group generators `g1`, `g2`:
//!
//! * `ProverParams::generators[k] = g1^{α^{k+1}}` for `k` in `0..2n`, except
//!   `generators[n]`, which is the identity (`g1^{α^{n+1}}` is never published).
//! * `VerifierParams::generators[k] = g2^{α^{k+1}}` for `k` in `0..n`.
//! * `VerifierParams::gt = e(g1, g2)^{α^{n+1}}`.
//!
//! Both bundles are immutable once built and are not `Clone`; share them by
//! reference.

use std::fmt;
use std::io::{Read, Write};

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::AffineRepr;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::{instrument, warn};

use crate::codec::{decode_g1, decode_g2};
use crate::config::{G2_POINT_LEN, MAX_N, PARAM_FORMAT_VERSION, POINT_LEN};
use crate::error::{Result, VecComError};

/// Structured G1 basis used to commit, prove and update.
pub struct ProverParams {
    pub(crate) n: usize,
    pub(crate) generators: Vec<G1Affine>,
}

/// Structured G2 basis and target-group element used to verify.
pub struct VerifierParams {
    pub(crate) n: usize,
    pub(crate) generators: Vec<G2Affine>,
    pub(crate) gt: PairingOutput<Bls12_381>,
}

pub(crate) fn check_capacity(n: usize) -> Result<()> {
    if n == 0 {
        return Err(VecComError::InvalidParameters(
            "vector capacity must be positive".to_string(),
        ));
    }
    if n > MAX_N {
        return Err(VecComError::InvalidParameters(format!(
            "vector capacity {} exceeds maximum {}",
            n, MAX_N
        )));
    }
    Ok(())
}

fn read_header<R: Read>(reader: &mut R) -> Result<usize> {
    let version = reader.read_u8()?;
    if version != PARAM_FORMAT_VERSION {
        return Err(VecComError::InvalidParameters(format!(
            "unsupported parameter format version {}",
            version
        )));
    }
    let n = reader.read_u32::<LittleEndian>()? as usize;
    check_capacity(n)?;
    Ok(n)
}

fn write_header<W: Write>(writer: &mut W, n: usize) -> Result<()> {
    writer.write_u8(PARAM_FORMAT_VERSION)?;
    writer.write_u32::<LittleEndian>(n as u32)?;
    Ok(())
}

impl ProverParams {
    pub(crate) fn new(n: usize, generators: Vec<G1Affine>) -> Self {
        debug_assert_eq!(generators.len(), 2 * n);
        Self { n, generators }
    }

    /// Vector capacity fixed at setup.
    pub fn n(&self) -> usize {
        self.n
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        if len != self.n {
            return Err(VecComError::CapacityMismatch {
                expected: self.n,
                got: len,
            });
        }
        Ok(())
    }

    /// Writes `version | n | 2n compressed G1 points`.
    #[instrument(level = "debug", skip_all, fields(n = self.n))]
    pub fn serialize<W: Write>(&self, mut writer: W) -> Result<()> {
        write_header(&mut writer, self.n)?;
        for g in &self.generators {
            g.serialize_compressed(&mut writer)?;
        }
        Ok(())
    }

    /// Reads a bundle written by [`ProverParams::serialize`]. Every point must
    /// be a canonical encoding of a prime-order subgroup element, and the
    /// unpublished slot must hold the identity.
    #[instrument(level = "debug", skip_all)]
    pub fn deserialize<R: Read>(mut reader: R) -> Result<Self> {
        let n = read_header(&mut reader)?;
        let mut generators = Vec::with_capacity(2 * n);
        let mut buf = [0u8; POINT_LEN];
        for _ in 0..2 * n {
            reader.read_exact(&mut buf)?;
            generators.push(decode_g1(&buf)?);
        }
        for (k, g) in generators.iter().enumerate() {
            if (k == n) != g.is_zero() {
                return Err(VecComError::InvalidParameters(format!(
                    "malformed prover generator at position {}",
                    k
                )));
            }
        }
        Ok(Self { n, generators })
    }

    /// Checks with pairings that this bundle and `vp` were derived from one
    /// trapdoor. Linear in `n`; meant for parameters loaded from storage.
    #[instrument(level = "debug", skip_all, fields(n = self.n))]
    pub fn check_consistency(&self, vp: &VerifierParams) -> bool {
        let n = self.n;
        if n != vp.n || self.generators.len() != 2 * n || vp.generators.len() != n {
            warn!("parameter bundles disagree on capacity");
            return false;
        }
        if !self.generators[n].is_zero() {
            return false;
        }

        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();

        // e(g1^{α^{k+1}}, g2) == e(g1, g2^{α^{k+1}})
        for k in 0..n {
            if Bls12_381::pairing(self.generators[k], g2)
                != Bls12_381::pairing(g1, vp.generators[k])
            {
                warn!(position = k, "lower prover generator inconsistent");
                return false;
            }
        }

        // e(g1^{α}, g2^{α^n}) == gt
        if Bls12_381::pairing(self.generators[0], vp.generators[n - 1]) != vp.gt {
            warn!("target-group element inconsistent");
            return false;
        }

        // e(g1^{α^{k+1}}, g2) == e(g1^{α^{k+1-n}}, g2^{α^n}) for the upper half
        for k in n + 1..2 * n {
            if Bls12_381::pairing(self.generators[k], g2)
                != Bls12_381::pairing(self.generators[k - n], vp.generators[n - 1])
            {
                warn!(position = k, "upper prover generator inconsistent");
                return false;
            }
        }
        true
    }
}

impl VerifierParams {
    pub(crate) fn new(
        n: usize,
        generators: Vec<G2Affine>,
        gt: PairingOutput<Bls12_381>,
    ) -> Self {
        debug_assert_eq!(generators.len(), n);
        Self { n, generators, gt }
    }

    /// Vector capacity fixed at setup.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Writes `version | n | n compressed G2 points | gt`.
    #[instrument(level = "debug", skip_all, fields(n = self.n))]
    pub fn serialize<W: Write>(&self, mut writer: W) -> Result<()> {
        write_header(&mut writer, self.n)?;
        for g in &self.generators {
            g.serialize_compressed(&mut writer)?;
        }
        self.gt.serialize_compressed(&mut writer)?;
        Ok(())
    }

    #[instrument(level = "debug", skip_all)]
    pub fn deserialize<R: Read>(mut reader: R) -> Result<Self> {
        let n = read_header(&mut reader)?;
        let mut generators = Vec::with_capacity(n);
        let mut buf = [0u8; G2_POINT_LEN];
        for _ in 0..n {
            reader.read_exact(&mut buf)?;
            generators.push(decode_g2(&buf)?);
        }
        if generators.iter().any(|g| g.is_zero()) {
            return Err(VecComError::InvalidParameters(
                "verifier generator is the identity".to_string(),
            ));
        }
        let gt = PairingOutput::<Bls12_381>::deserialize_compressed(&mut reader)?;
        Ok(Self { n, generators, gt })
    }
}

impl fmt::Debug for ProverParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProverParams")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for VerifierParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierParams")
            .field("n", &self.n)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ProverParams {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.generators == other.generators
    }
}

impl PartialEq for VerifierParams {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.generators == other.generators && self.gt == other.gt
    }
}
