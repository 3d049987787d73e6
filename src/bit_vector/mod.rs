//! Fixed-width bit vectors.
//!
//! # Introduction
//!
//! A [`FixedBitVector`] stores a sequence of `len` bits whose length is
//! decided at construction and never changes afterwards. Bits are packed into
//! machine words, with bit `i` living at word `i / WORD_LEN`, offset
//! `i % WORD_LEN`.
//!
//! The vector is seeded from an unsigned integer (bit `i` of the vector equals
//! bit `i` of the seed, truncating seed bits at and above `len`) or from an
//! iterator of booleans, and is mutated in place through [`set_bit`] and
//! [`clear_bit`]. Rendering through [`Display`](core::fmt::Display) produces
//! exactly `len` characters of `'0'`/`'1'`, most-significant bit first.
//!
//! [`set_bit`]: FixedBitVector::set_bit
//! [`clear_bit`]: FixedBitVector::clear_bit
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use fixedbit::bit_vector::*;
//!
//! let mut bv = FixedBitVector::from_int(8, 5)?;
//! assert_eq!(bv.to_string(), "00000101");
//!
//! bv.clear_bit(0)?;
//! assert_eq!(bv.to_string(), "00000100");
//!
//! assert_eq!(bv.len(), 8);
//! assert_eq!(bv.num_ones(), 1);
//! assert_eq!(bv.access(2), Some(true));
//! # Ok(())
//! # }
//! ```
use core::fmt;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// The number of bits in a machine word.
pub const WORD_LEN: usize = core::mem::size_of::<usize>() * 8;

/// Interface for reporting basic statistics in a bit vector.
pub trait NumBits {
    /// Returns the number of bits stored.
    fn num_bits(&self) -> usize;

    /// Returns the number of bits set.
    fn num_ones(&self) -> usize;

    /// Returns the number of bits unset.
    #[inline(always)]
    fn num_zeros(&self) -> usize {
        self.num_bits() - self.num_ones()
    }
}

/// Interface for accessing elements on bit arrays.
pub trait Access {
    /// Returns the `pos`-th bit, or [`None`] if out of bounds.
    fn access(&self, pos: usize) -> Option<bool>;
}

/// Mutable bit vector of a width fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBitVector {
    words: Vec<usize>,
    len: usize,
}

impl FixedBitVector {
    /// Creates a vector of `len` bits seeded from the binary representation
    /// of `seed`, least-significant bit at position 0.
    ///
    /// Seed bits at and above `len` are silently truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if `seed` is not castable to [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use fixedbit::bit_vector::FixedBitVector;
    ///
    /// let bv = FixedBitVector::from_int(4, 0b10101)?;
    /// assert_eq!(bv.to_string(), "0101");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_int<V: ToPrimitive>(len: usize, seed: V) -> Result<Self> {
        let seed = seed
            .to_usize()
            .ok_or_else(|| Error::invalid_argument("seed must be castable to usize"))?;
        let mut words = vec![0usize; len.div_ceil(WORD_LEN)];
        if len != 0 {
            let low = len.min(WORD_LEN);
            let mask = if low < WORD_LEN {
                (1 << low) - 1
            } else {
                usize::MAX
            };
            words[0] = seed & mask;
        }
        Ok(Self { words, len })
    }

    /// Creates a vector from a bit iterator, its width taken from the number
    /// of bits yielded.
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        let mut words = Vec::new();
        let mut len = 0;
        for bit in bits {
            let pos_in_word = len % WORD_LEN;
            if pos_in_word == 0 {
                words.push(bit as usize);
            } else {
                *words.last_mut().unwrap() |= (bit as usize) << pos_in_word;
            }
            len += 1;
        }
        Self { words, len }
    }

    /// Sets the `pos`-th bit to `bit`, leaving all other bits unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos` is out of bounds, leaving the
    /// vector unmodified.
    pub fn set_bit(&mut self, pos: usize, bit: bool) -> Result<()> {
        if self.len <= pos {
            return Err(Error::out_of_range(format!(
                "pos must be in 0..{}, but got {pos}.",
                self.len
            )));
        }
        let word = pos / WORD_LEN;
        let pos_in_word = pos % WORD_LEN;
        self.words[word] &= !(1 << pos_in_word);
        self.words[word] |= (bit as usize) << pos_in_word;
        Ok(())
    }

    /// Sets the `pos`-th bit to 0, leaving all other bits unchanged.
    ///
    /// Clearing an already-clear bit is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos` is out of bounds, leaving the
    /// vector unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use fixedbit::bit_vector::FixedBitVector;
    ///
    /// let mut bv = FixedBitVector::from_int(8, 5)?;
    /// bv.clear_bit(2)?;
    /// assert_eq!(bv.to_string(), "00000001");
    /// assert!(bv.clear_bit(8).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn clear_bit(&mut self, pos: usize) -> Result<()> {
        self.set_bit(pos, false)
    }

    /// Returns the number of bits stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no bits.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates an iterator over all bits, least significant first.
    pub const fn iter(&self) -> Iter {
        Iter { bv: self, pos: 0 }
    }

    /// Collects all bits into a `Vec<bool>` for inspection.
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }
}

impl Access for FixedBitVector {
    fn access(&self, pos: usize) -> Option<bool> {
        if pos < self.len {
            let word = pos / WORD_LEN;
            let shift = pos % WORD_LEN;
            Some((self.words[word] >> shift) & 1 == 1)
        } else {
            None
        }
    }
}

impl NumBits for FixedBitVector {
    fn num_bits(&self) -> usize {
        self.len
    }

    fn num_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl fmt::Display for FixedBitVector {
    /// Renders exactly `len` characters of `'0'`/`'1'`, most-significant bit
    /// first: the leftmost character is bit `len - 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for pos in (0..self.len).rev() {
            let word = pos / WORD_LEN;
            let shift = pos % WORD_LEN;
            let bit = (self.words[word] >> shift) & 1 == 1;
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Iterator over bits in a [`FixedBitVector`], least significant first.
pub struct Iter<'a> {
    bv: &'a FixedBitVector,
    pos: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.bv.len() {
            let bit = self.bv.access(self.pos).unwrap();
            self.pos += 1;
            Some(bit)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.bv.len() - self.pos;
        (remain, Some(remain))
    }
}

impl FromIterator<bool> for FixedBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_bits(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn gen_random_bits(len: usize, p: f64, seed: u64) -> Vec<bool> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_bool(p)).collect()
    }

    #[test]
    fn from_int_renders_msb_first() {
        let bv = FixedBitVector::from_int(8, 5).unwrap();
        assert_eq!(bv.to_string(), "00000101");
    }

    #[test]
    fn clear_high_bits_of_one() {
        let mut bv = FixedBitVector::from_int(32, 1).unwrap();
        for pos in (24..32).rev() {
            bv.clear_bit(pos).unwrap();
        }
        let rendered = bv.to_string();
        assert_eq!(rendered.len(), 32);
        assert_eq!(rendered, "00000000000000000000000000000001");
    }

    #[test]
    fn from_int_truncates_high_seed_bits() {
        let bv = FixedBitVector::from_int(4, 0b10101).unwrap();
        assert_eq!(bv.to_string(), "0101");
        assert_eq!(bv.num_ones(), 2);
    }

    #[test]
    fn from_int_rejects_uncastable_seed() {
        let e = FixedBitVector::from_int(8, -1i64).unwrap_err();
        assert_eq!(e.to_string(), "seed must be castable to usize");
    }

    #[test]
    fn rendered_length_equals_width() {
        for len in [0, 1, 7, 64, 65, 100] {
            let bv = FixedBitVector::from_int(len, 0b1011).unwrap();
            assert_eq!(bv.to_string().len(), len);
            assert_eq!(bv.len(), len);
        }
    }

    #[test]
    fn seed_bits_preserved_in_range() {
        let seed = 0b1100_1010usize;
        let bv = FixedBitVector::from_int(8, seed).unwrap();
        for pos in 0..8 {
            assert_eq!(bv.access(pos), Some((seed >> pos) & 1 == 1));
        }
        assert_eq!(bv.access(8), None);
    }

    #[test]
    fn clear_bit_leaves_other_bits_unchanged() {
        let mut bv = FixedBitVector::from_int(8, 0b1111_1111usize).unwrap();
        bv.clear_bit(3).unwrap();
        assert_eq!(bv.to_string(), "11110111");
        assert_eq!(bv.access(3), Some(false));
    }

    #[test]
    fn clear_bit_out_of_range_leaves_vector_unmodified() {
        let mut bv = FixedBitVector::from_int(8, 0b101usize).unwrap();
        let before = bv.clone();
        let e = bv.clear_bit(8).unwrap_err();
        assert_eq!(e.to_string(), "pos must be in 0..8, but got 8.");
        assert!(bv.clear_bit(100).is_err());
        assert_eq!(bv, before);
    }

    #[test]
    fn clear_bit_is_idempotent() {
        let mut bv = FixedBitVector::from_int(8, 0b101usize).unwrap();
        bv.clear_bit(2).unwrap();
        let once = bv.clone();
        bv.clear_bit(2).unwrap();
        assert_eq!(bv, once);
    }

    #[test]
    fn set_bit_roundtrip() {
        let mut bv = FixedBitVector::from_int(8, 0).unwrap();
        bv.set_bit(7, true).unwrap();
        assert_eq!(bv.to_string(), "10000000");
        bv.set_bit(7, false).unwrap();
        assert_eq!(bv.num_ones(), 0);
        assert!(bv.set_bit(8, true).is_err());
    }

    #[test]
    fn mutation_across_word_boundary() {
        let mut bv = FixedBitVector::from_int(100, 0).unwrap();
        bv.set_bit(99, true).unwrap();
        bv.set_bit(64, true).unwrap();
        bv.set_bit(63, true).unwrap();
        assert_eq!(bv.num_ones(), 3);
        bv.clear_bit(64).unwrap();
        assert_eq!(bv.access(64), Some(false));
        assert_eq!(bv.access(99), Some(true));
        assert_eq!(bv.access(63), Some(true));
    }

    #[test]
    fn from_bits_collects() {
        let bv = FixedBitVector::from_bits([true, false, true]);
        assert_eq!(bv.len(), 3);
        assert_eq!(bv.to_string(), "101");
        assert_eq!(bv.to_vec(), vec![true, false, true]);
        let collected: FixedBitVector = [false, true].into_iter().collect();
        assert_eq!(collected.to_string(), "10");
    }

    #[test]
    fn num_bits_counts() {
        let bv = FixedBitVector::from_bits([true, false, false, true]);
        assert_eq!(bv.num_bits(), 4);
        assert_eq!(bv.num_ones(), 2);
        assert_eq!(bv.num_zeros(), 2);
        assert!(!bv.is_empty());
        assert!(FixedBitVector::from_bits([]).is_empty());
    }

    #[test]
    fn iter_size_hint() {
        let bv = FixedBitVector::from_bits([true, false, true]);
        let mut it = bv.iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn random_bits_match_model() {
        let bits = gen_random_bits(1 << 12, 0.5, 113);
        let mut bv = FixedBitVector::from_bits(bits.iter().cloned());
        let mut model = bits.clone();

        for (pos, &bit) in model.iter().enumerate() {
            assert_eq!(bv.access(pos), Some(bit));
        }
        assert_eq!(bv.num_ones(), model.iter().filter(|&&b| b).count());

        let mut rng = ChaChaRng::seed_from_u64(59);
        for _ in 0..1000 {
            let pos = rng.gen_range(0..model.len());
            bv.clear_bit(pos).unwrap();
            model[pos] = false;
        }
        assert_eq!(bv.to_vec(), model);
    }
}
