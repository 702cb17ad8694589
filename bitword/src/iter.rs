use crate::Width;
use crate::bit_ops;

/// Iterator over the words of a borrowed byte string.
///
/// Created by [`BitWord::words`](crate::BitWord::words).
///
/// ```
/// use bitword::BitWord;
///
/// let mut words = BitWord::DIBIT.words(b"a");
/// assert_eq!(words.len(), 4);
/// assert_eq!(words.next(), Some(1));
/// assert_eq!(words.next_back(), Some(1));
/// assert_eq!(words.collect::<Vec<_>>(), vec![2, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Words<'a> {
    bytes: &'a [u8],
    width: Width,
    front: usize,
    back: usize,
}

impl<'a> Words<'a> {
    pub(crate) fn new(bytes: &'a [u8], width: Width) -> Self {
        Self {
            bytes,
            width,
            front: 0,
            back: width.total_words(bytes.len()),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let word = bit_ops::read_word(self.bytes, self.front, self.width);
        self.front += 1;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Words<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::read_word(self.bytes, self.back, self.width))
    }
}

impl ExactSizeIterator for Words<'_> {}

impl core::iter::FusedIterator for Words<'_> {}

#[cfg(test)]
mod tests {
    use crate::BitWord;

    #[test]
    fn empty_input_yields_nothing() {
        let mut words = BitWord::BIT.words(b"");
        assert_eq!(words.len(), 0);
        assert_eq!(words.next(), None);
        assert_eq!(words.next_back(), None);
    }

    #[test]
    fn nth_skips_words() {
        let mut words = BitWord::NIBBLE.words(b"abc");
        assert_eq!(words.nth(3), Some(2));
        assert_eq!(words.len(), 2);
        assert_eq!(words.nth(5), None);
        assert_eq!(words.next(), None);
    }

    #[test]
    fn reversed_is_encode_reversed() {
        let s = "我".as_bytes();
        let mut expected = BitWord::DIBIT.encode(s);
        expected.reverse();
        let got: Vec<u8> = BitWord::DIBIT.words(s).rev().collect();
        assert_eq!(got, expected);
    }
}
