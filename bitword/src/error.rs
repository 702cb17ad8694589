#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitWordError {
    #[cfg_attr(
        feature = "std",
        error("Word width must be one of 1, 2, 4 or 8 bits, got {0}")
    )]
    InvalidWidth(usize),

    #[cfg_attr(
        feature = "std",
        error("Word index {0} is out of bounds for {1} words")
    )]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(feature = "std", error("Word {word} does not fit in {width} bits"))]
    WordOverflow { word: u8, width: usize },

    #[cfg_attr(feature = "std", error("Range end {0} is negative"))]
    NegativeEnd(isize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitWordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitWordError::InvalidWidth(n) => {
                write!(f, "Word width must be one of 1, 2, 4 or 8 bits, got {}", n)
            }
            BitWordError::IndexOutOfBounds(i, total) => {
                write!(f, "Word index {} is out of bounds for {} words", i, total)
            }
            BitWordError::WordOverflow { word, width } => {
                write!(f, "Word {} does not fit in {} bits", word, width)
            }
            BitWordError::NegativeEnd(end) => write!(f, "Range end {} is negative", end),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitWordError>;

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            BitWordError::InvalidWidth(3).to_string(),
            "Word width must be one of 1, 2, 4 or 8 bits, got 3"
        );
        assert_eq!(
            BitWordError::IndexOutOfBounds(8, 8).to_string(),
            "Word index 8 is out of bounds for 8 words"
        );
        assert_eq!(
            BitWordError::WordOverflow { word: 4, width: 2 }.to_string(),
            "Word 4 does not fit in 2 bits"
        );
    }
}
