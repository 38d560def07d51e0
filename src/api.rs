//! Byte-level operation set for callers that hold commitments and proofs
//! only in their 48-byte wire form.
//!
//! Every point argument is decoded (and validated) on entry, so a malformed
//! buffer surfaces as [`BadEncoding`](crate::VecComError::BadEncoding) before
//! any arithmetic runs.
//! Parameter bundles and points are owned values: dropping them releases
//! them, and the `release_*` functions make that explicit at call sites that
//! want it spelled out.

use tracing::debug;

use crate::codec::{Point, PointBytes};
use crate::commitment::Commitment;
use crate::error::Result;
use crate::params::{ProverParams, VerifierParams};
use crate::proof::Proof;
use crate::setup;
use crate::verifier;

/// Derives a parameter pair from `seed` for vectors of length `n`.
pub fn paramgen(seed: &[u8], n: usize) -> Result<(ProverParams, VerifierParams)> {
    setup::paramgen(seed, n)
}

/// Commits to `values` and returns the 48-byte commitment.
pub fn commit<Blob: AsRef<[u8]>>(
    prover_params: &ProverParams,
    values: &[Blob],
) -> Result<PointBytes> {
    Ok(Commitment::new(prover_params, values)?.to_bytes())
}

/// Proves position `index`; the caller keeps `index` alongside the returned bytes.
pub fn prove<Blob: AsRef<[u8]>>(
    prover_params: &ProverParams,
    values: &[Blob],
    index: usize,
) -> Result<PointBytes> {
    Ok(Proof::new(prover_params, values, index)?.to_bytes())
}

/// Checks a 48-byte proof for position `index` against a 48-byte commitment.
pub fn verify<Blob: AsRef<[u8]>>(
    verifier_params: &VerifierParams,
    commitment: &PointBytes,
    proof: &PointBytes,
    value: Blob,
    index: usize,
) -> Result<bool> {
    let commitment = Commitment::from_bytes(commitment)?;
    let proof = Proof::from_bytes(proof, index)?;
    verifier::verify(verifier_params, &commitment, &proof, value)
}

/// Moves a 48-byte commitment to reflect one changed position.
pub fn commit_update<Blob: AsRef<[u8]>>(
    prover_params: &ProverParams,
    commitment: &PointBytes,
    changed_index: usize,
    value_before: Blob,
    value_after: Blob,
) -> Result<PointBytes> {
    let commitment = Commitment::from_bytes(commitment)?;
    Ok(commitment
        .update(prover_params, changed_index, value_before, value_after)?
        .to_bytes())
}

/// Moves a 48-byte proof for `proven_index` to reflect a change at
/// `changed_index`. Identity when the two indices coincide.
pub fn proof_update<Blob: AsRef<[u8]>>(
    prover_params: &ProverParams,
    proof: &PointBytes,
    proven_index: usize,
    changed_index: usize,
    value_before: Blob,
    value_after: Blob,
) -> Result<PointBytes> {
    let proof = Proof::from_bytes(proof, proven_index)?;
    Ok(proof
        .update(prover_params, changed_index, value_before, value_after)?
        .to_bytes())
}

pub fn point_to_bytes(point: &Point) -> PointBytes {
    point.to_bytes()
}

/// Decodes a point handle; rejects anything that is not a canonical encoding
/// of a prime-order subgroup element.
pub fn point_from_bytes(bytes: &[u8]) -> Result<Point> {
    Point::from_bytes(bytes)
}

pub fn release_prover_params(prover_params: ProverParams) {
    debug!(n = prover_params.n(), "releasing prover parameters");
    drop(prover_params);
}

pub fn release_verifier_params(verifier_params: VerifierParams) {
    debug!(n = verifier_params.n(), "releasing verifier parameters");
    drop(verifier_params);
}

pub fn release_point(point: Point) {
    drop(point);
}
