//! Linear algebra over GF(2).
//!
//! Vectors and matrix rows are bit-packed with `bitvec`, so every stored
//! entry is already reduced mod 2. Addition is XOR; products accumulate with
//! XOR of ANDed bits, which keeps intermediate sums inside {0, 1} as well.
//!
//! This module also owns the one bit-ordering convention shared by the code
//! constructor and the syndrome decoder: bit `i` of a syndrome carries `2^i`.

use crate::ecc::Result;
use crate::error::Error;
use bitvec::prelude::*;
use rand::Rng;
use std::fmt;

/// A fixed-length vector over GF(2).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gf2Vector {
    bits: BitVec,
}

impl Gf2Vector {
    /// The all-zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        Gf2Vector {
            bits: BitVec::repeat(false, len),
        }
    }

    /// The standard basis vector with a single 1 at `index` (0-indexed)
    pub fn basis(len: usize, index: usize) -> Result<Self> {
        if index >= len {
            return Err(Error::invalid_parameter(format!(
                "basis index {} out of range for length {}",
                index, len
            )));
        }
        let mut v = Self::zeros(len);
        v.bits.set(index, true);
        Ok(v)
    }

    pub fn from_bools(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Copies any bit slice, whatever its storage and ordering
    pub fn from_bitslice<T: BitStore, O: BitOrder>(bits: &BitSlice<T, O>) -> Self {
        bits.iter().by_vals().collect()
    }

    /// Draws every bit uniformly at random
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        (0..len).map(|_| rng.gen::<bool>()).collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.bits.set(index, value);
        Ok(())
    }

    /// Flips the bit at `index` (0-indexed)
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let current = self.bits[index];
        self.bits.set(index, !current);
        Ok(())
    }

    /// Element-wise XOR
    pub fn add(&self, other: &Gf2Vector) -> Result<Gf2Vector> {
        if self.len() != other.len() {
            return Err(Error::dimension_mismatch(
                "vector addition",
                self.len(),
                other.len(),
            ));
        }
        let mut bits = self.bits.clone();
        xor_words(&mut bits, &other.bits);
        Ok(Gf2Vector { bits })
    }

    /// Inner product mod 2
    pub fn dot(&self, other: &Gf2Vector) -> Result<bool> {
        if self.len() != other.len() {
            return Err(Error::dimension_mismatch(
                "inner product",
                self.len(),
                other.len(),
            ));
        }
        Ok(parity_of_and(&self.bits, &other.bits))
    }

    /// Number of ones (Hamming weight)
    pub fn weight(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// The bits as 0/1 bytes, index 0 first
    pub fn to_bits(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::invalid_parameter(format!(
                "bit index {} out of range for length {}",
                index,
                self.len()
            )));
        }
        Ok(())
    }
}

impl FromIterator<bool> for Gf2Vector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Gf2Vector {
            bits: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[u8]> for Gf2Vector {
    type Error = Error;

    /// Builds a vector from 0/1 values; anything else is rejected
    fn try_from(values: &[u8]) -> Result<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(Error::invalid_parameter(format!(
                    "value {} at index {} is not a GF(2) element",
                    other, i
                ))),
            })
            .collect()
    }
}

impl fmt::Display for Gf2Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// A dense matrix over GF(2), stored as bit-packed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gf2Matrix {
    rows: usize,
    cols: usize,
    data: Vec<BitVec>,
}

impl Gf2Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Gf2Matrix {
            rows,
            cols,
            data: vec![BitVec::repeat(false, cols); rows],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for (i, row) in m.data.iter_mut().enumerate() {
            row.set(i, true);
        }
        m
    }

    /// Stacks vectors as rows. All rows must share one length.
    pub fn from_rows(rows: Vec<Gf2Vector>) -> Result<Self> {
        let cols = rows.first().map_or(0, Gf2Vector::len);
        if let Some(ragged) = rows.iter().find(|row| row.len() != cols) {
            return Err(Error::dimension_mismatch(
                "matrix rows",
                cols,
                ragged.len(),
            ));
        }
        Ok(Gf2Matrix {
            rows: rows.len(),
            cols,
            data: rows.into_iter().map(|row| row.bits).collect(),
        })
    }

    /// Places vectors side by side as columns
    pub fn from_columns(columns: Vec<Gf2Vector>) -> Result<Self> {
        Ok(Self::from_rows(columns)?.transpose())
    }

    /// Parses rows of 0/1 values
    pub fn from_bits(rows: &[Vec<u8>]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|row| Gf2Vector::try_from(row.as_slice()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.data.get(row)?.get(col).map(|bit| *bit)
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        self.check_position(row, col)?;
        self.data[row].set(col, value);
        Ok(())
    }

    pub fn row(&self, row: usize) -> Option<Gf2Vector> {
        self.data.get(row).map(|bits| Gf2Vector { bits: bits.clone() })
    }

    pub fn set_row(&mut self, row: usize, values: &Gf2Vector) -> Result<()> {
        if row >= self.rows {
            return Err(Error::invalid_parameter(format!(
                "row {} out of range for {} rows",
                row, self.rows
            )));
        }
        if values.len() != self.cols {
            return Err(Error::dimension_mismatch("row assignment", self.cols, values.len()));
        }
        self.data[row] = values.bits.clone();
        Ok(())
    }

    pub fn column(&self, col: usize) -> Option<Gf2Vector> {
        if col >= self.cols {
            return None;
        }
        Some(self.data.iter().map(|row| row[col]).collect())
    }

    pub fn transpose(&self) -> Gf2Matrix {
        let mut t = Self::zeros(self.cols, self.rows);
        for (r, row) in self.data.iter().enumerate() {
            for c in row.iter_ones() {
                t.data[c].set(r, true);
            }
        }
        t
    }

    /// Element-wise XOR
    pub fn add(&self, other: &Gf2Matrix) -> Result<Gf2Matrix> {
        if self.rows != other.rows {
            return Err(Error::dimension_mismatch("matrix addition rows", self.rows, other.rows));
        }
        if self.cols != other.cols {
            return Err(Error::dimension_mismatch("matrix addition columns", self.cols, other.cols));
        }
        let rows = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| {
                let mut sum = a.clone();
                xor_words(&mut sum, b);
                sum
            })
            .collect();
        Ok(Gf2Matrix {
            rows: self.rows,
            cols: self.cols,
            data: rows,
        })
    }

    /// Matrix product mod 2; `self` is a×b, `other` must be b×c
    pub fn mul(&self, other: &Gf2Matrix) -> Result<Gf2Matrix> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                "matrix product",
                self.cols,
                other.rows,
            ));
        }
        // row i of the product is the sum of the rows of `other` picked by row i of `self`
        let data = self
            .data
            .iter()
            .map(|row| {
                let mut out = BitVec::repeat(false, other.cols);
                for picked in row.iter_ones() {
                    xor_words(&mut out, &other.data[picked]);
                }
                out
            })
            .collect();
        Ok(Gf2Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Matrix-vector product mod 2
    pub fn mul_vec(&self, v: &Gf2Vector) -> Result<Gf2Vector> {
        if self.cols != v.len() {
            return Err(Error::dimension_mismatch(
                "matrix-vector product",
                self.cols,
                v.len(),
            ));
        }
        Ok(self
            .data
            .iter()
            .map(|row| parity_of_and(row, &v.bits))
            .collect())
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|row| row.not_any())
    }

    pub fn is_identity(&self) -> bool {
        self.rows == self.cols
            && self
                .data
                .iter()
                .enumerate()
                .all(|(i, row)| row.count_ones() == 1 && row[i])
    }

    fn check_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::invalid_parameter(format!(
                "entry ({}, {}) out of range for {}x{} matrix",
                row, col, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Gf2Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            for bit in row.iter().by_vals() {
                write!(f, "{}", u8::from(bit))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Rows and vectors are always built from bit 0 of their first word, so equal
// lengths mean equal word layouts. Bits past `len()` in the last word are
// not guaranteed to be zero and are masked off where they could leak.

/// Adds `src` into `dst` a word at a time. Both must share one length.
fn xor_words(dst: &mut BitVec, src: &BitVec) {
    for (d, s) in dst.as_raw_mut_slice().iter_mut().zip(src.as_raw_slice()) {
        *d ^= *s;
    }
}

/// Inner product mod 2 of two equal-length rows, one word at a time.
fn parity_of_and(a: &BitVec, b: &BitVec) -> bool {
    let words = a.as_raw_slice().len();
    let tail_mask = match a.len() % usize::BITS as usize {
        0 => usize::MAX,
        live => (1usize << live) - 1,
    };
    let acc = a
        .as_raw_slice()
        .iter()
        .zip(b.as_raw_slice())
        .enumerate()
        .fold(0usize, |acc, (i, (x, y))| {
            let word = x & y;
            acc ^ (if i + 1 == words { word & tail_mask } else { word })
        });
    acc.count_ones() & 1 == 1
}

/// Binary representation of a 1-indexed codeword position, least significant
/// bit first, padded to `parity_bits` entries.
///
/// Column `j` of the parity-check matrix is `position_to_syndrome(j, m)`, so a
/// single error at position `j` produces exactly this syndrome.
pub fn position_to_syndrome(position: usize, parity_bits: usize) -> Result<Gf2Vector> {
    if parity_bits < usize::BITS as usize && position >> parity_bits != 0 {
        return Err(Error::invalid_parameter(format!(
            "position {} does not fit in {} bits",
            position, parity_bits
        )));
    }
    Ok((0..parity_bits)
        .map(|i| i < usize::BITS as usize && (position >> i) & 1 == 1)
        .collect())
}

/// Inverse of [`position_to_syndrome`]: bit `i` contributes `2^i`.
pub fn syndrome_to_position(syndrome: &Gf2Vector) -> Result<usize> {
    if syndrome.len() > usize::BITS as usize {
        return Err(Error::invalid_parameter(format!(
            "syndrome of {} bits does not fit in a position index",
            syndrome.len()
        )));
    }
    Ok(syndrome
        .as_bitslice()
        .iter_ones()
        .fold(0usize, |acc, i| acc | (1 << i)))
}
