//! Maps application values onto non-zero scalars.
//!
//! A value is hashed with SHA3-512 under a fixed domain prefix and the 64-byte
//! digest is reduced modulo the BLS12-381 scalar field order. The result is
//! never zero: verification divides by it.

use ark_bls12_381::Fr;
use ark_ff::{One, PrimeField, Zero};
use digest::Digest;
use sha3::Sha3_512;

use crate::config::HASH_DOMAIN;

/// Hashes a value into a non-zero scalar.
pub fn hash_to_field<Blob: AsRef<[u8]>>(value: Blob) -> Fr {
    let mut hasher = Sha3_512::new();
    hasher.update(HASH_DOMAIN);
    hasher.update(value.as_ref());
    let digest = hasher.finalize();

    let t = Fr::from_be_bytes_mod_order(&digest);
    // a zero digest mod r is not expected in practice
    if t.is_zero() {
        Fr::one()
    } else {
        t
    }
}

/// Hashes every value of a vector.
pub(crate) fn hash_all<Blob: AsRef<[u8]>>(values: &[Blob]) -> Vec<Fr> {
    values.iter().map(hash_to_field).collect()
}

/// `H(after) - H(before)`, the scalar by which a single-entry change moves
/// a commitment or proof.
pub(crate) fn update_delta<Blob: AsRef<[u8]>>(before: Blob, after: Blob) -> Fr {
    hash_to_field(after) - hash_to_field(before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_to_field(b"abc"), hash_to_field(b"abc"));
        assert_eq!(hash_to_field(b"abc"), hash_to_field(b"abc".to_vec()));
    }

    #[test]
    fn test_hash_separates_values() {
        assert_ne!(hash_to_field(b"abc"), hash_to_field(b"abd"));
        assert_ne!(hash_to_field(b""), hash_to_field(b"\0"));
    }

    #[test]
    fn test_hash_is_non_zero() {
        for i in 0..64u32 {
            assert!(!hash_to_field(i.to_le_bytes()).is_zero());
        }
        assert!(!hash_to_field(b"").is_zero());
    }

    #[test]
    fn test_update_delta() {
        let d = update_delta(b"old", b"new");
        assert_eq!(hash_to_field(b"old") + d, hash_to_field(b"new"));
        assert!(update_delta(b"same", b"same").is_zero());
    }
}
