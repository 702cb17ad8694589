//! Conversion between byte strings and sequences of fixed-width words.
//!
//! # Examples
//!
//! ```rust
//! use bitword::BitWord;
//!
//! let nibbles = BitWord::new(4)?;
//! assert_eq!(nibbles.encode(b"a"), vec![0x6, 0x1]);
//! assert_eq!(nibbles.decode(&[0x6, 0x1])?, b"a".to_vec());
//!
//! // Dangling words are zero-filled on the right.
//! assert_eq!(nibbles.decode(&[1, 2, 3])?, vec![0x12, 0x30]);
//! # Ok::<(), bitword::BitWordError>(())
//! ```

use crate::bit_ops;
use crate::compare::NegativeEnd;
use crate::iter::Words;
use crate::{BitWordError, Result, Width};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// A codec for one word width.
///
/// The width is validated once, at construction; every operation after that
/// works on borrowed input and returns fresh output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWord {
    width: Width,
    negative_end: NegativeEnd,
}

impl BitWord {
    pub const BIT: BitWord = BitWord::from_width(Width::One);
    pub const DIBIT: BitWord = BitWord::from_width(Width::Two);
    pub const NIBBLE: BitWord = BitWord::from_width(Width::Four);
    pub const BYTE: BitWord = BitWord::from_width(Width::Eight);

    /// Creates a codec for `width`-bit words.
    ///
    /// # Errors
    ///
    /// Returns [`BitWordError::InvalidWidth`] unless `width` is 1, 2, 4 or 8.
    ///
    /// ```
    /// use bitword::{BitWord, BitWordError};
    ///
    /// assert!(BitWord::new(2).is_ok());
    /// assert_eq!(BitWord::new(3), Err(BitWordError::InvalidWidth(3)));
    /// ```
    pub fn new(width: usize) -> Result<Self> {
        Ok(Self::from_width(Width::try_from(width)?))
    }

    /// Creates a codec for an already validated [`Width`]; cannot fail.
    pub const fn from_width(width: Width) -> Self {
        Self {
            width,
            negative_end: NegativeEnd::Reject,
        }
    }

    /// Selects how [`first_divergence`](Self::first_divergence) treats a negative `end`.
    pub const fn with_negative_end(mut self, policy: NegativeEnd) -> Self {
        self.negative_end = policy;
        self
    }

    /// Bits per word.
    #[inline]
    pub const fn width(&self) -> Width {
        self.width
    }

    /// Policy applied to a negative `end`, [`NegativeEnd::Reject`] unless changed.
    #[inline]
    pub const fn negative_end(&self) -> NegativeEnd {
        self.negative_end
    }

    #[inline]
    pub const fn total_words(&self, bytes: &[u8]) -> usize {
        self.width.total_words(bytes.len())
    }

    /// Splits every byte into its words, most significant first.
    ///
    /// ```
    /// use bitword::BitWord;
    ///
    /// assert_eq!(BitWord::BIT.encode(b"a"), vec![0, 1, 1, 0, 0, 0, 0, 1]);
    /// assert_eq!(BitWord::DIBIT.encode(b"a"), vec![1, 2, 0, 1]);
    /// assert!(BitWord::BYTE.encode(b"").is_empty());
    /// ```
    pub fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_words(bytes));
        self.encode_into(bytes, &mut out);
        out
    }

    /// Appends the words of `bytes` to `out`.
    pub fn encode_into(&self, bytes: &[u8], out: &mut Vec<u8>) {
        if self.width == Width::Eight {
            out.extend_from_slice(bytes);
            return;
        }
        out.reserve(self.total_words(bytes));
        let bits = self.width.bits();
        let mask = self.width.mask();
        for &byte in bytes {
            let mut shift = 8;
            while shift > 0 {
                shift -= bits;
                out.push((byte >> shift) & mask);
            }
        }
    }

    /// Packs words back into bytes, most significant first.
    ///
    /// When the word count is not a multiple of the words per byte, the
    /// unused low bits of the last byte are zero.
    ///
    /// # Errors
    ///
    /// Returns [`BitWordError::WordOverflow`] if a word does not fit in the width.
    pub fn decode(&self, words: &[u8]) -> Result<Vec<u8>> {
        let mask = self.width.mask();
        if let Some(&word) = words.iter().find(|&&w| w & !mask != 0) {
            return Err(BitWordError::WordOverflow {
                word,
                width: self.width.bits(),
            });
        }

        if self.width == Width::Eight {
            return Ok(words.to_vec());
        }

        let mut out = vec![0u8; self.width.byte_len(words.len())];
        for (i, &word) in words.iter().enumerate() {
            bit_ops::write_word(&mut out, i, self.width, word);
        }
        Ok(out)
    }

    /// Encodes each byte string independently, preserving order.
    ///
    /// ```
    /// use bitword::BitWord;
    ///
    /// let out = BitWord::NIBBLE.encode_all(["a", "bc"]);
    /// assert_eq!(out, vec![vec![6, 1], vec![6, 2, 6, 3]]);
    /// ```
    pub fn encode_all<I>(&self, items: I) -> Vec<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|bytes| self.encode(bytes.as_ref()))
            .collect()
    }

    /// Decodes each word sequence independently, preserving order.
    ///
    /// # Errors
    ///
    /// Fails with the first element's error, as [`decode`](Self::decode) would.
    pub fn decode_all<I>(&self, items: I) -> Result<Vec<Vec<u8>>>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|words| self.decode(words.as_ref()))
            .collect()
    }

    /// Returns word `index` of `bytes` without encoding the rest.
    ///
    /// Agrees with `encode(bytes)[index]` for every valid index.
    ///
    /// # Errors
    ///
    /// Returns [`BitWordError::IndexOutOfBounds`] if `index >= total_words(bytes)`.
    ///
    /// ```
    /// use bitword::{BitWord, BitWordError};
    ///
    /// assert_eq!(BitWord::NIBBLE.word_at(b"abc", 3)?, 2);
    /// assert_eq!(
    ///     BitWord::BYTE.word_at(b"a", 1),
    ///     Err(BitWordError::IndexOutOfBounds(1, 1))
    /// );
    /// # Ok::<(), BitWordError>(())
    /// ```
    pub fn word_at(&self, bytes: &[u8], index: usize) -> Result<u8> {
        let total = self.total_words(bytes);
        if index >= total {
            return Err(BitWordError::IndexOutOfBounds(index, total));
        }
        Ok(bit_ops::read_word(bytes, index, self.width))
    }

    /// Like [`word_at`](Self::word_at), returning `None` when out of bounds.
    pub fn get(&self, bytes: &[u8], index: usize) -> Option<u8> {
        self.word_at(bytes, index).ok()
    }

    /// Lazily iterates the words of `bytes`.
    pub fn words<'a>(&self, bytes: &'a [u8]) -> Words<'a> {
        Words::new(bytes, self.width)
    }
}

impl From<Width> for BitWord {
    fn from(width: Width) -> Self {
        BitWord::from_width(width)
    }
}

impl TryFrom<usize> for BitWord {
    type Error = BitWordError;

    fn try_from(width: usize) -> Result<Self> {
        BitWord::new(width)
    }
}
