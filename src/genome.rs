//! # Genome
//!
//! A fixed-width bit vector interpreted as an unsigned integer in `[0, 2^width)`.
//! Bit index 0 is the least significant bit.

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// The widest genome supported. It matches the f64 mantissa, so every genome
/// value converts to f64 exactly. Decoding may still round the widest values up
/// to the right bound, which `SearchSpace::decode` clamps.
pub const MAX_GENOME_WIDTH: usize = 53;

/// Width used when the configuration does not name one.
pub const DEFAULT_GENOME_WIDTH: usize = 30;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Genome {
    bits: u64,
    width: usize,
}

impl Genome {
    /// Creates a genome of the given width from an integer value. Bits above
    /// `width` are discarded.
    pub fn new(value: u64, width: usize) -> Self {
        debug_assert!((1..=MAX_GENOME_WIDTH).contains(&width));
        Self {
            bits: value & Self::mask(width),
            width,
        }
    }

    /// An all-zeros genome.
    pub fn zeros(width: usize) -> Self {
        Self::new(0, width)
    }

    /// A genome drawn uniformly from `[0, 2^width)`.
    pub fn random(width: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self::new(rng.bits(width), width)
    }

    fn mask(width: usize) -> u64 {
        if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn value(&self) -> u64 {
        self.bits
    }

    /// `2^width` as a float, the number of distinct genomes of this width.
    pub fn cardinality(&self) -> f64 {
        2f64.powi(self.width as i32)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.width {
            Ok(())
        } else {
            Err(GeneticError::BitIndexOutOfRange {
                index,
                width: self.width,
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.check(index)?;
        Ok(self.bit(index))
    }

    pub fn set(&mut self, index: usize, bit: bool) -> Result<()> {
        self.check(index)?;
        self.put(index, bit);
        Ok(())
    }

    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check(index)?;
        self.toggle(index);
        Ok(())
    }

    // Unchecked accessors for operators whose indices come from `0..width`.

    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.width);
        (self.bits >> index) & 1 == 1
    }

    pub(crate) fn put(&mut self, index: usize, bit: bool) {
        debug_assert!(index < self.width);
        if bit {
            self.bits |= 1 << index;
        } else {
            self.bits &= !(1 << index);
        }
    }

    pub(crate) fn toggle(&mut self, index: usize) {
        debug_assert!(index < self.width);
        self.bits ^= 1 << index;
    }
}

/// Prints the bits from the most significant to the least significant.
impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in (0..self.width).rev() {
            write!(f, "{}", if self.bit(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_leaves_other_bits() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        for width in [1, 2, 7, 30, MAX_GENOME_WIDTH] {
            for _ in 0..20 {
                let original = Genome::random(width, &mut rng);
                for index in 0..width {
                    for bit in [false, true] {
                        let mut genome = original;
                        genome.set(index, bit).unwrap();
                        assert_eq!(genome.get(index).unwrap(), bit);
                        for other in (0..width).filter(|&i| i != index) {
                            assert_eq!(genome.get(other).unwrap(), original.get(other).unwrap());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let mut genome = Genome::zeros(30);
        assert!(matches!(
            genome.get(30),
            Err(GeneticError::BitIndexOutOfRange { index: 30, width: 30 })
        ));
        assert!(genome.set(31, true).is_err());
        assert!(genome.flip(64).is_err());
        assert_eq!(genome.value(), 0);
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut genome = Genome::new(0b1010, 4);
        genome.flip(0).unwrap();
        assert_eq!(genome.value(), 0b1011);
        genome.flip(0).unwrap();
        assert_eq!(genome.value(), 0b1010);
    }

    #[test]
    fn test_new_masks_high_bits() {
        let genome = Genome::new(0xFF, 4);
        assert_eq!(genome.value(), 0xF);
    }

    #[test]
    fn test_display_msb_first() {
        let genome = Genome::new(0b0011, 4);
        assert_eq!(genome.to_string(), "0011");
        assert_eq!(Genome::new(1, 1).to_string(), "1");
    }
}
