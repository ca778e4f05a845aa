//! Single bit-flip channel.
//!
//! Models one fault class only: exactly one flipped bit per codeword. Bursts,
//! erasures and multi-bit corruption are outside what the decoder corrects.

use crate::ecc::gf2::Gf2Vector;
use crate::ecc::Result;
use crate::error::Error;
use rand::Rng;

/// Flips bit `position` (1-indexed) by adding the matching basis vector
pub fn inject_error(codeword: &Gf2Vector, position: usize) -> Result<Gf2Vector> {
    if position == 0 || position > codeword.len() {
        return Err(Error::invalid_parameter(format!(
            "error position {} outside 1..={}",
            position,
            codeword.len()
        )));
    }
    codeword.add(&Gf2Vector::basis(codeword.len(), position - 1)?)
}

/// Flips one uniformly chosen bit, returning the corrupted word and the 1-indexed position
pub fn inject_random_error<R: Rng + ?Sized>(
    codeword: &Gf2Vector,
    rng: &mut R,
) -> Result<(Gf2Vector, usize)> {
    if codeword.is_empty() {
        return Err(Error::invalid_parameter(
            "cannot inject an error into an empty codeword",
        ));
    }
    let position = rng.gen_range(1..=codeword.len());
    Ok((inject_error(codeword, position)?, position))
}
