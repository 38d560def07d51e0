//! Canonical 48-byte encoding of G1 points.
//!
//! Encoding uses the compressed, zcash-compatible form produced by
//! `ark-bls12-381`. Decoding always runs the on-curve and prime-order subgroup
//! checks, so a decoded point is safe to feed into pairings. A buffer is only
//! accepted if it is the exact encoding of the point it decodes to: the
//! underlying deserializer ignores the x-bytes and the sort flag once the
//! infinity flag is set, so every decode is followed by a re-encode.

use ark_bls12_381::{G1Affine, G2Affine};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use subtle::{Choice, ConstantTimeEq};
use tracing::debug;

use crate::config::{G2_POINT_LEN, POINT_LEN};
use crate::error::{Result, VecComError};

/// Fixed-width wire form of a G1 point.
pub type PointBytes = [u8; POINT_LEN];

/// Encodes a point into its canonical compressed form.
///
/// Infallible: a compressed G1 point always occupies exactly
/// [`POINT_LEN`] bytes.
pub fn encode_g1(point: &G1Affine) -> PointBytes {
    let mut out = [0u8; POINT_LEN];
    // a compressed G1 point always serializes to exactly POINT_LEN bytes
    if let Err(e) = point.serialize_with_mode(&mut out[..], Compress::Yes) {
        unreachable!("compressed G1 point does not fit in {} bytes: {:?}", POINT_LEN, e);
    }
    out
}

/// Decodes a canonical compressed point, rejecting anything that is not a
/// valid element of the prime-order subgroup.
pub fn decode_g1(bytes: &[u8]) -> Result<G1Affine> {
    if bytes.len() != POINT_LEN {
        return Err(VecComError::BadEncoding(format!(
            "expected {} bytes, got {}",
            POINT_LEN,
            bytes.len()
        )));
    }
    let point = G1Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
        .map_err(|e| {
            debug!(error = ?e, "rejected G1 encoding");
            VecComError::BadEncoding(format!("{:?}", e))
        })?;
    if encode_g1(&point)[..] != *bytes {
        debug!("rejected non-canonical G1 encoding");
        return Err(VecComError::BadEncoding(
            "non-canonical G1 encoding".to_string(),
        ));
    }
    Ok(point)
}

pub(crate) fn encode_g2(point: &G2Affine) -> [u8; G2_POINT_LEN] {
    let mut out = [0u8; G2_POINT_LEN];
    if let Err(e) = point.serialize_with_mode(&mut out[..], Compress::Yes) {
        unreachable!("compressed G2 point does not fit in {} bytes: {:?}", G2_POINT_LEN, e);
    }
    out
}

/// G2 counterpart of [`decode_g1`], used when loading verifier parameters.
pub(crate) fn decode_g2(bytes: &[u8]) -> Result<G2Affine> {
    if bytes.len() != G2_POINT_LEN {
        return Err(VecComError::BadEncoding(format!(
            "expected {} bytes, got {}",
            G2_POINT_LEN,
            bytes.len()
        )));
    }
    let point = G2Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
        .map_err(|e| VecComError::BadEncoding(format!("{:?}", e)))?;
    if encode_g2(&point)[..] != *bytes {
        return Err(VecComError::BadEncoding(
            "non-canonical G2 encoding".to_string(),
        ));
    }
    Ok(point)
}

/// An owned, validated G1 point as handed across the boundary surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(pub(crate) G1Affine);

impl Point {
    /// Canonical 48-byte form.
    pub fn to_bytes(&self) -> PointBytes {
        encode_g1(&self.0)
    }

    /// Parses a canonical 48-byte encoding; see [`decode_g1`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_g1(bytes).map(Self)
    }

    pub fn as_affine(&self) -> &G1Affine {
        &self.0
    }
}

impl From<G1Affine> for Point {
    fn from(p: G1Affine) -> Self {
        Self(p)
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}
