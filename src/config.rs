//! Fixed sizes, limits and domain-separation tags.

/// Width of a compressed BLS12-381 G1 point, the wire size of commitments and proofs.
pub const POINT_LEN: usize = 48;

/// Width of a compressed BLS12-381 G2 point.
pub const G2_POINT_LEN: usize = 96;

/// Largest vector capacity accepted by setup and by parameter deserialization.
/// Bounds the allocation an untrusted parameter file can trigger.
pub const MAX_N: usize = 65536;

/// Leading byte of serialized parameter bundles.
pub const PARAM_FORMAT_VERSION: u8 = 0;

/// blake3 key-derivation context for turning a setup seed into a trapdoor.
pub const SETUP_DOMAIN: &str = "veccom 2024-01-01 bls12-381 trapdoor derivation v0";

/// Prefix absorbed before every value in hash-to-scalar.
pub const HASH_DOMAIN: &[u8] = b"veccom-bls12-381-value-v0";
