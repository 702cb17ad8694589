//! Word widths that evenly divide a byte.

use crate::{BitWordError, Result};
use core::fmt;

/// Number of bits per word.
///
/// Only divisors of 8 are representable, so a `Width` in hand is always
/// valid and every byte holds a whole number of words.
///
/// ```
/// use bitword::Width;
///
/// let w = Width::try_from(4usize)?;
/// assert_eq!(w, Width::Four);
/// assert_eq!(w.words_per_byte(), 2);
/// assert!(Width::try_from(3usize).is_err());
/// # Ok::<(), bitword::BitWordError>(())
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::One, Width::Two, Width::Four, Width::Eight];

    /// Width in bits: 1, 2, 4 or 8.
    #[inline]
    pub const fn bits(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn words_per_byte(self) -> usize {
        8 / self.bits()
    }

    /// Mask selecting one right-aligned word, `2^width - 1`.
    #[inline]
    pub const fn mask(self) -> u8 {
        match self {
            Width::Eight => u8::MAX,
            _ => (1u8 << self.bits()) - 1,
        }
    }

    /// Number of words in a byte string of `byte_len` bytes.
    #[inline]
    pub const fn total_words(self, byte_len: usize) -> usize {
        byte_len * self.words_per_byte()
    }

    /// Number of bytes needed to hold `word_count` words, rounding up.
    #[inline]
    pub const fn byte_len(self, word_count: usize) -> usize {
        word_count.div_ceil(self.words_per_byte())
    }
}

impl TryFrom<usize> for Width {
    type Error = BitWordError;

    fn try_from(n: usize) -> Result<Self> {
        match n {
            1 => Ok(Width::One),
            2 => Ok(Width::Two),
            4 => Ok(Width::Four),
            8 => Ok(Width::Eight),
            _ => Err(BitWordError::InvalidWidth(n)),
        }
    }
}

impl TryFrom<u8> for Width {
    type Error = BitWordError;

    fn try_from(n: u8) -> Result<Self> {
        Width::try_from(n as usize)
    }
}

impl From<Width> for usize {
    fn from(w: Width) -> Self {
        w.bits()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_divisors_of_eight() {
        for n in 0..=16usize {
            let res = Width::try_from(n);
            if matches!(n, 1 | 2 | 4 | 8) {
                assert_eq!(res.map(Width::bits), Ok(n));
            } else {
                assert_eq!(res, Err(BitWordError::InvalidWidth(n)));
            }
        }
    }

    #[test]
    fn derived_sizes() {
        assert_eq!(Width::One.mask(), 0b1);
        assert_eq!(Width::Two.mask(), 0b11);
        assert_eq!(Width::Four.mask(), 0xF);
        assert_eq!(Width::Eight.mask(), 0xFF);

        assert_eq!(Width::Two.total_words(3), 12);
        assert_eq!(Width::Four.byte_len(3), 2);
        assert_eq!(Width::One.byte_len(9), 2);
        assert_eq!(Width::Eight.byte_len(0), 0);
    }
}
