//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! With `m` parity bits they encode `k = 2^m - m - 1` data bits into `n = 2^m - 1` bits and can
//! correct any single-bit error. The most common variant is the (7,4) code with `m = 3`.
//!
//! The code is built algebraically over GF(2):
//! - `G` (n×k) generator matrix, mapping a logical word to a codeword
//! - `H` (m×n) parity-check matrix, whose null space is the code
//! - `R` (k×n) extraction matrix, pulling the data bits back out
//!
//! Codeword positions are numbered 1..=n. Powers of two hold parity bits and every other
//! position holds a data bit, in ascending order. Column `j` of `H` is `j` written in binary,
//! so the syndrome of a single error is the position of the flipped bit.
//!
//! A received word with two or more flipped bits produces a syndrome that points somewhere
//! else, or nowhere. The decoder cannot tell that apart from a single error.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Data storage systems

use crate::ecc::gf2::{position_to_syndrome, syndrome_to_position, Gf2Matrix, Gf2Vector};
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use bitvec::prelude::*;
use bitvec::view::BitView;
use log::{debug, trace};

/// Smallest supported number of parity bits
pub const MIN_PARITY_BITS: usize = 2;
/// Largest supported number of parity bits (n = 4095)
pub const MAX_PARITY_BITS: usize = 12;

/// Bytes of big-endian payload length framed ahead of byte-stream data
const LENGTH_PREFIX_BYTES: usize = 4;

/// A constructed [2^m - 1, 2^m - m - 1] Hamming code.
///
/// The matrices are built once and never change, so a code can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct HammingCode {
    /// Number of parity bits (m)
    parity_bits: usize,
    /// Number of data bits per block (k)
    data_bits: usize,
    /// Generator matrix G, n×k
    generator: Gf2Matrix,
    /// Parity-check matrix H, m×n
    parity_check: Gf2Matrix,
    /// Extraction matrix R, k×n
    extraction: Gf2Matrix,
}

/// Where the decoder applied its correction, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Zero syndrome, the received word was accepted as is
    None,
    /// A parity bit was flipped; the data bits were already intact
    Parity { position: usize },
    /// A data bit was flipped before extraction
    Data {
        position: usize,
        /// 0-indexed bit of the logical word
        logical_index: usize,
    },
}

/// Result of decoding one received word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Recovered logical word (k bits)
    pub word: Gf2Vector,
    /// Syndrome as a position in 0..=n; 0 means no error was detected
    pub syndrome: usize,
    /// The received word after correction
    pub corrected: Gf2Vector,
    /// Which bit was flipped, classified as parity or data
    pub correction: Correction,
}

impl HammingCode {
    /// Constructs the Hamming code with `parity_bits` parity bits.
    ///
    /// # Arguments
    ///
    /// * `parity_bits` - Number of parity bits `m`, between 2 and [`MAX_PARITY_BITS`]
    ///
    /// # Returns
    ///
    /// The code with its G, H and R matrices, already checked against
    /// `H·G = 0` and `R·G = I`, or `InvalidParameter` for an unsupported `m`
    pub fn new(parity_bits: usize) -> Result<Self> {
        if parity_bits < MIN_PARITY_BITS {
            return Err(Error::invalid_parameter(format!(
                "a Hamming code needs at least {} parity bits, got {}",
                MIN_PARITY_BITS, parity_bits
            )));
        }
        if parity_bits > MAX_PARITY_BITS {
            return Err(Error::invalid_parameter(format!(
                "at most {} parity bits are supported, got {}",
                MAX_PARITY_BITS, parity_bits
            )));
        }

        let total_bits = (1usize << parity_bits) - 1;
        let data_bits = total_bits - parity_bits;
        let data_positions = data_positions(total_bits);

        // H: column j is j in binary
        let columns = (1..=total_bits)
            .map(|position| position_to_syndrome(position, parity_bits))
            .collect::<Result<Vec<_>>>()?;
        let parity_check = Gf2Matrix::from_columns(columns)?;

        // G: identity on the data rows
        let mut generator = Gf2Matrix::zeros(total_bits, data_bits);
        for (logical, &position) in data_positions.iter().enumerate() {
            generator.set(position - 1, logical, true)?;
        }

        // G: each parity row is the sum of the data rows it covers
        for check in 0..parity_bits {
            let parity_position = 1usize << check;
            let mut row = Gf2Vector::zeros(data_bits);
            for &position in &data_positions {
                if parity_check.get(check, position - 1) == Some(true) {
                    let data_row = generator
                        .row(position - 1)
                        .ok_or_else(|| Error::invalid_parameter("data row out of range"))?;
                    row = row.add(&data_row)?;
                }
            }
            trace!("parity position {} covers {}", parity_position, row);
            generator.set_row(parity_position - 1, &row)?;
        }

        let mut extraction = Gf2Matrix::zeros(data_bits, total_bits);
        for (logical, &position) in data_positions.iter().enumerate() {
            extraction.set(logical, position - 1, true)?;
        }

        let code = HammingCode {
            parity_bits,
            data_bits,
            generator,
            parity_check,
            extraction,
        };
        code.verify()?;

        debug!(
            "constructed Hamming({}, {}) code with {} parity bits",
            total_bits, data_bits, parity_bits
        );
        Ok(code)
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        Self::new(3).expect("m = 3 is always a valid Hamming code")
    }

    /// Re-checks `H·G ≡ 0` and `R·G ≡ I_k` (mod 2)
    pub fn verify(&self) -> Result<()> {
        let hg = self.parity_check.mul(&self.generator)?;
        if !hg.is_zero() {
            return Err(Error::InvariantViolation(format!(
                "H·G is not zero for m = {}",
                self.parity_bits
            )));
        }
        let rg = self.extraction.mul(&self.generator)?;
        if !rg.is_identity() {
            return Err(Error::InvariantViolation(format!(
                "R·G is not the identity for m = {}",
                self.parity_bits
            )));
        }
        Ok(())
    }

    /// Number of parity bits (m)
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Number of data bits per block (k)
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Gets the total code word length (n = data bits + parity bits)
    pub fn total_bits(&self) -> usize {
        self.data_bits + self.parity_bits
    }

    pub fn generator(&self) -> &Gf2Matrix {
        &self.generator
    }

    pub fn parity_check(&self) -> &Gf2Matrix {
        &self.parity_check
    }

    pub fn extraction(&self) -> &Gf2Matrix {
        &self.extraction
    }

    /// Whether the 1-indexed `position` holds a parity bit
    pub fn is_parity_position(&self, position: usize) -> bool {
        position <= self.total_bits() && position.is_power_of_two()
    }

    /// 1-indexed parity positions: 1, 2, 4, ...
    pub fn parity_positions(&self) -> Vec<usize> {
        (0..self.parity_bits).map(|i| 1 << i).collect()
    }

    /// 1-indexed data positions in logical order
    pub fn data_positions(&self) -> Vec<usize> {
        data_positions(self.total_bits())
    }

    /// Encodes a k-bit logical word as `G · word`
    pub fn encode(&self, word: &Gf2Vector) -> Result<Gf2Vector> {
        if word.len() != self.data_bits {
            return Err(Error::dimension_mismatch(
                "encode",
                self.data_bits,
                word.len(),
            ));
        }
        self.generator.mul_vec(word)
    }

    /// Syndrome of a received word, as a position in 0..=n
    pub fn syndrome(&self, received: &Gf2Vector) -> Result<usize> {
        self.check_received(received)?;
        syndrome_to_position(&self.parity_check.mul_vec(received)?)
    }

    /// Whether `v` lies in the null space of H
    pub fn is_codeword(&self, v: &Gf2Vector) -> Result<bool> {
        Ok(self.syndrome(v)? == 0)
    }

    /// Decodes a received n-bit word, correcting a single-bit error
    ///
    /// # Arguments
    ///
    /// * `received` - The possibly corrupted codeword
    ///
    /// # Returns
    ///
    /// The recovered logical word together with the syndrome. A nonzero
    /// syndrome is trusted as the error position; with two or more flipped
    /// bits it will be wrong and the returned word silently differs.
    pub fn decode(&self, received: &Gf2Vector) -> Result<Decoded> {
        let syndrome = self.syndrome(received)?;
        let mut corrected = received.clone();

        let correction = if syndrome == 0 {
            Correction::None
        } else {
            corrected.flip(syndrome - 1)?;
            match logical_index(syndrome) {
                None => Correction::Parity { position: syndrome },
                Some(logical_index) => Correction::Data {
                    position: syndrome,
                    logical_index,
                },
            }
        };
        if correction != Correction::None {
            debug!("syndrome {} corrected: {:?}", syndrome, correction);
        }

        let word = self.extraction.mul_vec(&corrected)?;
        Ok(Decoded {
            word,
            syndrome,
            corrected,
            correction,
        })
    }

    /// Gets the number of encoded bytes needed for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> usize {
        let total_input_bits = (input_bytes + LENGTH_PREFIX_BYTES) * 8;
        let total_blocks = total_input_bits.div_ceil(self.data_bits);
        (total_blocks * self.total_bits()).div_ceil(8)
    }

    /// Encodes a byte slice block by block
    ///
    /// The payload is framed with its 32-bit big-endian length, split MSB-first into
    /// k-bit blocks (the last one zero-filled) and each block is encoded to n bits.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let length = u32::try_from(data.len()).map_err(|_| {
            Error::invalid_parameter(format!("payload of {} bytes is too long", data.len()))
        })?;
        let mut framed = Vec::with_capacity(data.len() + LENGTH_PREFIX_BYTES);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(data);

        let input_bits = framed.view_bits::<Msb0>();
        let blocks = input_bits.len().div_ceil(self.data_bits);
        let n = self.total_bits();
        let mut encoded = bitvec![u8, Msb0; 0; blocks * n];

        for (block_idx, chunk) in input_bits.chunks(self.data_bits).enumerate() {
            let word: Gf2Vector = chunk
                .iter()
                .by_vals()
                .chain(std::iter::repeat(false))
                .take(self.data_bits)
                .collect();
            let codeword = self.encode(&word)?;
            let output = &mut encoded[block_idx * n..(block_idx + 1) * n];
            for (i, bit) in codeword.iter().enumerate() {
                output.set(i, bit);
            }
        }

        Ok(encoded.as_raw_slice().to_vec())
    }

    /// Decodes data produced by [`HammingCode::encode_bytes`], correcting one error per block
    pub fn decode_bytes(&self, encoded: &[u8]) -> Result<Vec<u8>> {
        let encoded_bits = encoded.view_bits::<Msb0>();
        let n = self.total_bits();
        let k = self.data_bits;
        let blocks = encoded_bits.len() / n;
        let mut decoded = bitvec![u8, Msb0; 0; blocks * k];

        let mut corrections = 0usize;
        for block_idx in 0..blocks {
            let received =
                Gf2Vector::from_bitslice(&encoded_bits[block_idx * n..(block_idx + 1) * n]);
            let block = self.decode(&received)?;
            if block.syndrome != 0 {
                corrections += 1;
            }
            let output = &mut decoded[block_idx * k..(block_idx + 1) * k];
            for (i, bit) in block.word.iter().enumerate() {
                output.set(i, bit);
            }
        }
        if corrections > 0 {
            debug!("corrected {} of {} blocks", corrections, blocks);
        }

        let header_bits = LENGTH_PREFIX_BYTES * 8;
        if decoded.len() < header_bits {
            return Err(Error::dimension_mismatch(
                "byte stream header bits",
                header_bits,
                decoded.len(),
            ));
        }

        let bytes = decoded.as_raw_slice();
        let mut header = [0u8; LENGTH_PREFIX_BYTES];
        header.copy_from_slice(&bytes[..LENGTH_PREFIX_BYTES]);
        let declared = u32::from_be_bytes(header) as usize;
        let available = decoded.len() / 8 - LENGTH_PREFIX_BYTES;
        if declared > available {
            return Err(Error::dimension_mismatch(
                "byte stream payload",
                declared,
                available,
            ));
        }

        let expected = self.encoded_bytes_needed(declared);
        if encoded.len() != expected {
            return Err(Error::dimension_mismatch(
                "byte stream length",
                expected,
                encoded.len(),
            ));
        }

        Ok(bytes[LENGTH_PREFIX_BYTES..LENGTH_PREFIX_BYTES + declared].to_vec())
    }

    fn check_received(&self, received: &Gf2Vector) -> Result<()> {
        if received.len() != self.total_bits() {
            return Err(Error::dimension_mismatch(
                "received word",
                self.total_bits(),
                received.len(),
            ));
        }
        Ok(())
    }
}

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encode_bytes(data)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.decode_bytes(data)
    }
}

/// Non-power-of-two positions in 1..=total_bits
fn data_positions(total_bits: usize) -> Vec<usize> {
    (1..=total_bits)
        .filter(|position| !position.is_power_of_two())
        .collect()
}

/// 0-indexed logical bit held at a 1-indexed position, `None` for parity positions
fn logical_index(position: usize) -> Option<usize> {
    if position == 0 || position.is_power_of_two() {
        return None;
    }
    // parity positions below `position` are 1, 2, ..., 2^ilog2(position)
    Some(position - position.ilog2() as usize - 2)
}

/// Constructs the Hamming code with `parity_bits` parity bits
pub fn construct_code(parity_bits: usize) -> Result<HammingCode> {
    HammingCode::new(parity_bits)
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> HammingCode {
    HammingCode::standard_7_4()
}

/// Encodes bytes using the standard (7,4) Hamming code
pub fn hamming_encode(data: &[u8]) -> Result<Vec<u8>> {
    create_hamming_7_4().encode_bytes(data)
}

/// Decodes bytes using the standard (7,4) Hamming code
pub fn hamming_decode(encoded: &[u8]) -> Result<Vec<u8>> {
    create_hamming_7_4().decode_bytes(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::channel::inject_error;

    fn word(bits: &[u8]) -> Gf2Vector {
        Gf2Vector::try_from(bits).unwrap()
    }

    #[test]
    fn test_hamming_creation() {
        let hamming = HammingCode::standard_7_4();
        assert_eq!(hamming.parity_bits(), 3);
        assert_eq!(hamming.data_bits(), 4);
        assert_eq!(hamming.total_bits(), 7);
        assert_eq!(hamming.parity_positions(), vec![1, 2, 4]);
        assert_eq!(hamming.data_positions(), vec![3, 5, 6, 7]);

        let hamming = HammingCode::new(4).unwrap();
        assert_eq!(hamming.data_bits(), 11);
        assert_eq!(hamming.total_bits(), 15);

        let hamming = HammingCode::new(2).unwrap();
        assert_eq!(hamming.data_bits(), 1);
        assert_eq!(hamming.total_bits(), 3);
    }

    #[test]
    fn test_invalid_parity_bits() {
        assert!(matches!(
            HammingCode::new(0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            HammingCode::new(1),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            HammingCode::new(MAX_PARITY_BITS + 1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_7_4_matrices_match_reference_layout() {
        let hamming = create_hamming_7_4();

        let g = Gf2Matrix::from_bits(&[
            vec![1, 1, 0, 1], // p1
            vec![1, 0, 1, 1], // p2
            vec![1, 0, 0, 0], // d1
            vec![0, 1, 1, 1], // p4
            vec![0, 1, 0, 0], // d2
            vec![0, 0, 1, 0], // d3
            vec![0, 0, 0, 1], // d4
        ])
        .unwrap();
        let h = Gf2Matrix::from_bits(&[
            vec![1, 0, 1, 0, 1, 0, 1],
            vec![0, 1, 1, 0, 0, 1, 1],
            vec![0, 0, 0, 1, 1, 1, 1],
        ])
        .unwrap();
        let r = Gf2Matrix::from_bits(&[
            vec![0, 0, 1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 1],
        ])
        .unwrap();

        assert_eq!(hamming.generator(), &g);
        assert_eq!(hamming.parity_check(), &h);
        assert_eq!(hamming.extraction(), &r);
    }

    #[test]
    fn test_code_identities_hold() {
        for m in MIN_PARITY_BITS..=6 {
            let hamming = HammingCode::new(m).unwrap();
            let hg = hamming.parity_check().mul(hamming.generator()).unwrap();
            assert!(hg.is_zero(), "H·G != 0 for m = {}", m);
            let rg = hamming.extraction().mul(hamming.generator()).unwrap();
            assert!(rg.is_identity(), "R·G != I for m = {}", m);
            assert!(hamming.verify().is_ok());
        }
    }

    #[test]
    fn test_encode_single_data_bit() {
        let hamming = create_hamming_7_4();
        let codeword = hamming.encode(&word(&[1, 0, 0, 0])).unwrap();
        // p1 p2 d1 p4 d2 d3 d4
        assert_eq!(codeword.to_bits(), vec![1, 1, 1, 0, 0, 0, 0]);
        assert!(hamming.is_codeword(&codeword).unwrap());
    }

    #[test]
    fn test_encode_rejects_wrong_length() {
        let hamming = create_hamming_7_4();
        assert_eq!(
            hamming.encode(&word(&[1, 0, 1])),
            Err(Error::dimension_mismatch("encode", 4, 3))
        );
        assert!(matches!(
            hamming.decode(&word(&[1, 0, 1, 0, 0, 0])),
            Err(Error::DimensionMismatch {
                expected: 7,
                actual: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_without_errors() {
        let hamming = create_hamming_7_4();
        let logical = word(&[1, 1, 0, 0]);
        let codeword = hamming.encode(&logical).unwrap();

        let decoded = hamming.decode(&codeword).unwrap();
        assert_eq!(decoded.word, logical);
        assert_eq!(decoded.syndrome, 0);
        assert_eq!(decoded.corrected, codeword);
        assert_eq!(decoded.correction, Correction::None);
    }

    #[test]
    fn test_hamming_error_correction() {
        let hamming = create_hamming_7_4();
        let logical = word(&[1, 0, 0, 0]);
        let codeword = hamming.encode(&logical).unwrap();

        let received = inject_error(&codeword, 3).unwrap();
        let decoded = hamming.decode(&received).unwrap();
        assert_eq!(decoded.syndrome, 3);
        assert_eq!(decoded.word, logical);
        assert_eq!(decoded.corrected, codeword);
        assert_eq!(
            decoded.correction,
            Correction::Data {
                position: 3,
                logical_index: 0
            }
        );
    }

    #[test]
    fn test_parity_error_is_reported_but_harmless() {
        let hamming = create_hamming_7_4();
        let logical = word(&[0, 1, 1, 0]);
        let codeword = hamming.encode(&logical).unwrap();

        let received = inject_error(&codeword, 4).unwrap();
        let decoded = hamming.decode(&received).unwrap();
        assert_eq!(decoded.syndrome, 4);
        assert_eq!(decoded.word, logical);
        assert_eq!(decoded.correction, Correction::Parity { position: 4 });
    }

    #[test]
    fn test_double_error_is_miscorrected() {
        // Two flips look like a single flip somewhere else
        let hamming = create_hamming_7_4();
        let logical = word(&[1, 0, 1, 1]);
        let codeword = hamming.encode(&logical).unwrap();

        let received = inject_error(&inject_error(&codeword, 3).unwrap(), 5).unwrap();
        let decoded = hamming.decode(&received).unwrap();
        assert_eq!(decoded.syndrome, 3 ^ 5);
        assert_ne!(decoded.corrected, codeword);
    }

    #[test]
    fn test_logical_index_of_positions() {
        assert_eq!(logical_index(1), None);
        assert_eq!(logical_index(2), None);
        assert_eq!(logical_index(3), Some(0));
        assert_eq!(logical_index(4), None);
        assert_eq!(logical_index(5), Some(1));
        assert_eq!(logical_index(7), Some(3));
        assert_eq!(logical_index(9), Some(4));
        assert_eq!(logical_index(15), Some(10));

        let hamming = HammingCode::new(5).unwrap();
        for (logical, position) in hamming.data_positions().into_iter().enumerate() {
            assert_eq!(logical_index(position), Some(logical));
        }
    }

    #[test]
    fn test_hamming_encode_decode_bytes() {
        let data = b"Test data for Hamming code";
        for m in 2..=5 {
            let hamming = HammingCode::new(m).unwrap();
            let encoded = hamming.encode_bytes(data).unwrap();
            assert_eq!(encoded.len(), hamming.encoded_bytes_needed(data.len()));
            let decoded = hamming.decode_bytes(&encoded).unwrap();
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn test_byte_stream_error_correction() {
        let data = b"Test";
        let hamming = create_hamming_7_4();

        let mut encoded = hamming.encode_bytes(data).unwrap();
        // One flip in the first block, one in the last full block
        encoded[0] ^= 0x40;
        let last = (encoded.len() * 8 / 7 - 1) * 7;
        encoded[last / 8] ^= 0x80 >> (last % 8);

        let decoded = hamming.decode_bytes(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_empty_input() {
        let hamming = create_hamming_7_4();
        let encoded = hamming.encode_bytes(&[]).unwrap();
        assert!(!encoded.is_empty());
        assert!(hamming.decode_bytes(&encoded).unwrap().is_empty());

        assert!(matches!(
            hamming.decode_bytes(&[]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_truncated_stream_rejected() {
        let hamming = create_hamming_7_4();
        let encoded = hamming.encode_bytes(b"a longer payload").unwrap();
        let result = hamming.decode_bytes(&encoded[..encoded.len() / 2]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                context: "byte stream payload",
                ..
            })
        ));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let hamming = HammingCode::new(4).unwrap();
        let mut encoded = hamming.encode_bytes(b"payload").unwrap();
        let expected = encoded.len();
        encoded.push(0);
        assert_eq!(
            hamming.decode_bytes(&encoded),
            Err(Error::dimension_mismatch(
                "byte stream length",
                expected,
                expected + 1
            ))
        );

        // a whole extra all-zero block after the payload
        let hamming = create_hamming_7_4();
        let mut encoded = hamming.encode_bytes(b"Test").unwrap();
        encoded.extend_from_slice(&[0; 7]);
        assert!(matches!(
            hamming.decode_bytes(&encoded),
            Err(Error::DimensionMismatch {
                context: "byte stream length",
                ..
            })
        ));
    }

    #[test]
    fn test_largest_code_constructs_and_verifies() {
        let hamming = HammingCode::new(MAX_PARITY_BITS).unwrap();
        assert_eq!(hamming.total_bits(), 4095);
        assert_eq!(hamming.data_bits(), 4083);
        assert!(hamming.verify().is_ok());

        let logical: Gf2Vector = (0..hamming.data_bits()).map(|i| i % 3 == 0).collect();
        let codeword = hamming.encode(&logical).unwrap();
        for position in [1, 3, 2048, 4095] {
            let decoded = hamming
                .decode(&inject_error(&codeword, position).unwrap())
                .unwrap();
            assert_eq!(decoded.syndrome, position);
            assert_eq!(decoded.word, logical);
        }
    }

    #[test]
    fn test_helper_functions() {
        let data = b"Test";
        let encoded = hamming_encode(data).unwrap();
        let decoded = hamming_decode(&encoded).unwrap();
        assert_eq!(decoded, data);

        let hamming = construct_code(3).unwrap();
        let via_trait = ErrorCorrection::encode(&hamming, data).unwrap();
        assert_eq!(via_trait, encoded);
        assert_eq!(ErrorCorrection::decode(&hamming, &via_trait).unwrap(), data);
    }
}
