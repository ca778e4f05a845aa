pub mod ecc;
pub mod error;

pub use ecc::{
    construct_code, inject_error, Correction, Decoded, ErrorCorrection, Gf2Matrix, Gf2Vector,
    HammingCode,
};
pub use error::{Error, Result};
