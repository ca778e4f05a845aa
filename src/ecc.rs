//! Error correction codes over GF(2).
//!
//! This module provides:
//! - GF(2) vectors and matrices
//! - Hamming code construction, encoding and syndrome decoding
//! - A single bit-flip channel for testing and demonstration
//! - Randomised batch trials, optionally run in parallel
//!
//! # Examples
//!
//! ```rust
//! use hamming::ecc::{construct_code, inject_error, Gf2Vector};
//!
//! let code = construct_code(3).unwrap();
//! let word = Gf2Vector::try_from(&[1u8, 0, 0, 0][..]).unwrap();
//! let codeword = code.encode(&word).unwrap();
//! assert_eq!(codeword.to_bits(), vec![1, 1, 1, 0, 0, 0, 0]);
//!
//! let received = inject_error(&codeword, 3).unwrap();
//! let decoded = code.decode(&received).unwrap();
//! assert_eq!(decoded.syndrome, 3);
//! assert_eq!(decoded.word, word);
//! ```

pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod channel;
pub mod gf2;
pub mod hamming;
pub mod trials;

pub use channel::{inject_error, inject_random_error};
pub use gf2::{position_to_syndrome, syndrome_to_position, Gf2Matrix, Gf2Vector};
pub use hamming::{
    construct_code, create_hamming_7_4, hamming_decode, hamming_encode, Correction, Decoded,
    HammingCode, MAX_PARITY_BITS, MIN_PARITY_BITS,
};
pub use trials::{run_trials, TrialConfig, TrialReport};
