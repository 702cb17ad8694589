//! Locating the first word at which two byte strings differ.
//!
//! Both operands are read in place through the same bit addressing as
//! [`BitWord::word_at`]; neither is ever encoded into a word sequence.
//!
//! # Range clamping
//!
//! The scanned range is `[from, min(end, total_words(a), total_words(b)))`
//! and the result never falls below `from`: a `from` at or past the clamped
//! end returns `from`. A negative `from` counts as 0. An empty request
//! (`from == end`) returns `end` without reading either operand, and an
//! inverted one (`from > end`) returns the caller's `end` unchanged. A
//! negative `end` is governed by [`NegativeEnd`].
//!
//! ```rust
//! use bitword::{BitWord, BitWordError, NegativeEnd};
//!
//! let nibbles = BitWord::NIBBLE;
//! assert_eq!(nibbles.first_divergence(b"aa", b"ab", 0, 4)?, 3);
//! assert_eq!(nibbles.first_divergence(b"aac", b"aa", 0, 100)?, 4);
//!
//! assert_eq!(
//!     nibbles.first_divergence(b"aaa", b"aaa", 0, -1),
//!     Err(BitWordError::NegativeEnd(-1))
//! );
//! let legacy = nibbles.with_negative_end(NegativeEnd::ClampToLength);
//! assert_eq!(legacy.first_divergence(b"aaa", b"aaa", 0, -1)?, 6);
//! # Ok::<(), BitWordError>(())
//! ```

use core::ops::{Bound, RangeBounds};

use crate::bit_ops;
use crate::{BitWord, BitWordError, Result};

/// Treatment of a negative `end` passed to [`BitWord::first_divergence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NegativeEnd {
    /// Fail with [`BitWordError::NegativeEnd`].
    #[default]
    Reject,
    /// Scan to the end of the shorter operand, the legacy behaviour where a
    /// negative end wrapped to a huge unsigned bound.
    ClampToLength,
}

impl BitWord {
    /// Returns the smallest index in `[from, end)` at which the words of `a`
    /// and `b` differ, or `max(from, clamped end)` if they agree throughout.
    ///
    /// # Errors
    ///
    /// Returns [`BitWordError::NegativeEnd`] for a negative `end` under
    /// [`NegativeEnd::Reject`]. Out-of-range bounds are otherwise clamped.
    pub fn first_divergence(
        &self,
        a: &[u8],
        b: &[u8],
        from: isize,
        end: isize,
    ) -> Result<usize> {
        let end = match usize::try_from(end) {
            Ok(end) => end,
            Err(_) => match self.negative_end() {
                NegativeEnd::Reject => return Err(BitWordError::NegativeEnd(end)),
                NegativeEnd::ClampToLength => usize::MAX,
            },
        };
        let from = usize::try_from(from).unwrap_or(0);
        if from >= end {
            return Ok(end);
        }
        Ok(self.scan(a, b, from, end))
    }

    /// [`first_divergence`](Self::first_divergence) over an unsigned range.
    ///
    /// An unbounded end scans to the end of the shorter operand.
    ///
    /// ```
    /// use bitword::BitWord;
    ///
    /// assert_eq!(BitWord::BIT.first_divergence_range(b"a", b"b", ..), 6);
    /// assert_eq!(BitWord::BIT.first_divergence_range(b"a", b"b", 2..=4), 5);
    /// ```
    pub fn first_divergence_range<R>(&self, a: &[u8], b: &[u8], range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let from = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => usize::MAX,
        };
        if from >= end {
            return end;
        }
        self.scan(a, b, from, end)
    }

    fn scan(&self, a: &[u8], b: &[u8], from: usize, end: usize) -> usize {
        let end = end.min(self.total_words(a)).min(self.total_words(b));
        if from >= end {
            return from;
        }
        let width = self.width();
        let per_byte = width.words_per_byte();
        let differs =
            |i: usize| bit_ops::read_word(a, i, width) != bit_ops::read_word(b, i, width);

        // Leading words up to the next byte boundary.
        let mut i = from;
        while i < end && i % per_byte != 0 {
            if differs(i) {
                return i;
            }
            i += 1;
        }

        let first_byte = i / per_byte;
        let last_byte = end / per_byte;
        if first_byte < last_byte {
            let (sa, sb) = (&a[first_byte..last_byte], &b[first_byte..last_byte]);
            if let Some(k) = bit_ops::first_mismatch(sa, sb) {
                let byte = first_byte + k;
                return byte * per_byte + bit_ops::first_set_word(a[byte] ^ b[byte], width);
            }
            i = last_byte * per_byte;
        }

        // Trailing words of a partially covered byte.
        while i < end {
            if differs(i) {
                return i;
            }
            i += 1;
        }
        end
    }
}
