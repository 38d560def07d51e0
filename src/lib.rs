//! Pairing-based vector commitments over BLS12-381.
//!
//! A vector of `n` byte-string values is committed to a single 48-byte G1
//! point. Any position can be opened with a 48-byte proof, and both the
//! commitment and every proof can be moved to reflect a single changed entry
//! in constant time, without the rest of the vector.
//!
//! ```no_run
//! use veccom::{paramgen, Commitment, Proof};
//!
//! let values: Vec<Vec<u8>> = (0..4).map(|i| vec![i as u8; 8]).collect();
//! let (pp, vp) = paramgen(b"demo seed", 4)?;
//! let com = Commitment::new(&pp, &values)?;
//! let proof = Proof::new(&pp, &values, 2)?;
//! assert!(proof.verify(&vp, &com, &values[2])?);
//! # Ok::<(), veccom::VecComError>(())
//! ```

pub mod api;
pub mod codec;
pub mod commitment;
pub mod config;
pub mod error;
pub mod hash_to_field;
pub mod params;
pub mod proof;
pub mod setup;
pub mod verifier;

pub use codec::{decode_g1, encode_g1, Point, PointBytes};
pub use commitment::Commitment;
pub use config::{MAX_N, POINT_LEN};
pub use error::{Result, VecComError};
pub use hash_to_field::hash_to_field;
pub use params::{ProverParams, VerifierParams};
pub use proof::{prove_all, Proof};
pub use setup::paramgen;
pub use verifier::verify;
