//! MSB-first bit addressing shared by the codec, the accessor and the comparator.
//!
//! Word `i` of a byte string starts at bit `i * width`, counted from the most
//! significant bit of byte 0. Callers are responsible for bounds.

use crate::Width;

/// Byte position and right shift that isolate word `index`.
#[inline(always)]
pub(crate) fn locate(index: usize, width: Width) -> (usize, u32) {
    let bit_pos = index * width.bits();
    let byte_pos = bit_pos / 8;
    let shift = 8 - width.bits() - bit_pos % 8;
    (byte_pos, shift as u32)
}

#[inline(always)]
pub(crate) fn read_word(slice: &[u8], index: usize, width: Width) -> u8 {
    let (byte_pos, shift) = locate(index, width);
    (slice[byte_pos] >> shift) & width.mask()
}

/// ORs `word` into its slot. The slot must still be zero.
#[inline(always)]
pub(crate) fn write_word(slice: &mut [u8], index: usize, width: Width, word: u8) {
    let (byte_pos, shift) = locate(index, width);
    slice[byte_pos] |= (word & width.mask()) << shift;
}

/// Index, within a byte, of the first word in which `xor` has a set bit.
#[inline(always)]
pub(crate) fn first_set_word(xor: u8, width: Width) -> usize {
    debug_assert!(xor != 0);
    xor.leading_zeros() as usize / width.bits()
}

/// Position of the first differing byte over the common prefix of `a` and `b`.
///
/// Compares eight bytes per step; the XOR of two big-endian reads puts the
/// earliest byte in the most significant position, so `leading_zeros / 8`
/// names the offending byte directly.
pub(crate) fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    let mut offset = 0;
    for (ca, cb) in a.chunks_exact(8).zip(b.chunks_exact(8)) {
        let x: u64 = bytemuck::pod_read_unaligned(ca);
        let y: u64 = bytemuck::pod_read_unaligned(cb);
        let diff = u64::from_be(x ^ y);
        if diff != 0 {
            return Some(offset + (diff.leading_zeros() / 8) as usize);
        }
        offset += 8;
    }

    a[offset..]
        .iter()
        .zip(&b[offset..])
        .position(|(x, y)| x != y)
        .map(|i| offset + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_is_msb_first() {
        assert_eq!(locate(0, Width::One), (0, 7));
        assert_eq!(locate(7, Width::One), (0, 0));
        assert_eq!(locate(8, Width::One), (1, 7));
        assert_eq!(locate(1, Width::Two), (0, 4));
        assert_eq!(locate(3, Width::Four), (1, 0));
        assert_eq!(locate(2, Width::Eight), (2, 0));
    }

    #[test]
    fn write_then_read_word() {
        let mut buf = [0u8; 2];
        write_word(&mut buf, 0, Width::Four, 0x1);
        write_word(&mut buf, 1, Width::Four, 0x2);
        write_word(&mut buf, 2, Width::Four, 0x3);
        assert_eq!(buf, [0x12, 0x30]);
        assert_eq!(read_word(&buf, 2, Width::Four), 0x3);
        assert_eq!(read_word(&buf, 3, Width::Four), 0x0);
    }

    #[test]
    fn first_set_word_in_byte() {
        // 0x61 ^ 0x62 = 0b0000_0011
        assert_eq!(first_set_word(0x03, Width::One), 6);
        assert_eq!(first_set_word(0x03, Width::Two), 3);
        assert_eq!(first_set_word(0x03, Width::Four), 1);
        assert_eq!(first_set_word(0x03, Width::Eight), 0);
        assert_eq!(first_set_word(0x80, Width::One), 0);
    }

    #[test]
    fn first_mismatch_across_chunks() {
        let a = [7u8; 20];
        let mut b = a;
        assert_eq!(first_mismatch(&a, &b), None);

        b[11] = 0;
        assert_eq!(first_mismatch(&a, &b), Some(11));

        b[3] = 0;
        assert_eq!(first_mismatch(&a, &b), Some(3));

        b[3] = 7;
        b[11] = 7;
        b[19] = 1;
        assert_eq!(first_mismatch(&a, &b), Some(19));
    }

    #[test]
    fn first_mismatch_stops_at_shorter() {
        assert_eq!(first_mismatch(b"abc", b"ab"), None);
        assert_eq!(first_mismatch(b"", b"xyz"), None);
        assert_eq!(first_mismatch(b"aac", b"ab"), Some(1));
    }
}
