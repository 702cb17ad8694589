//! # bitword
//!
//! A `no_std` compatible codec that views a byte string as a sequence of
//! equal-width words of 1, 2, 4 or 8 bits, most significant bit first.
//!
//! ```rust
//! use bitword::BitWord;
//!
//! let dibits = BitWord::new(2)?;
//!
//! // 0x61 = 0b01_10_00_01
//! let words = dibits.encode(b"a");
//! assert_eq!(words, vec![1, 2, 0, 1]);
//! assert_eq!(dibits.decode(&words)?, b"a".to_vec());
//!
//! // Random access without encoding the whole string
//! assert_eq!(dibits.word_at(b"a", 1)?, 2);
//!
//! // First differing word within a range
//! assert_eq!(dibits.first_divergence(b"aa", b"ab", 0, 8)?, 7);
//! # Ok::<(), bitword::BitWordError>(())
//! ```
//!
//! ## Word Widths
//!
//! | width | words per byte | word range |
//! |-------|----------------|------------|
//! | 1     | 8              | 0..=1      |
//! | 2     | 4              | 0..=3      |
//! | 4     | 2              | 0..=15     |
//! | 8     | 1              | 0..=255    |
//!
//! Any other width is rejected when the codec is built.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitWordError, Result};

mod bit_ops;

pub mod codec;
pub mod compare;
pub mod iter;
pub mod width;

pub use codec::BitWord;
pub use compare::NegativeEnd;
pub use iter::Words;
pub use width::Width;
