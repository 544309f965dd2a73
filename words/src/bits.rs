//! Bit-level access to a byte buffer treated as one big-endian bit stream.
//!
//! Bit 0 is the most significant bit of byte 0, bit 8 the most significant bit
//! of byte 1, and so on. Runs are read and written most significant bit first.
//!
//! Indices past the end of the buffer panic; callers size their buffers.

/// Byte offset and mask selecting bit `n`.
fn mask_for(n: usize) -> (usize, u8) {
    (n / 8, 1 << (7 - n % 8))
}

/// Return bit `n` of `buf` as 0 or 1.
///
/// `nth_bit(9, &[0xAB, 0xCD])` is 1: `10101011 1[1]001101`.
pub fn nth_bit(n: usize, buf: &[u8]) -> u8 {
    let (byte, mask) = mask_for(n);
    u8::from(buf[byte] & mask != 0)
}

/// Clear bit `n` when `v` is zero, set it otherwise.
pub fn set_bit(n: usize, buf: &mut [u8], v: u32) {
    let (byte, mask) = mask_for(n);
    if v == 0 {
        buf[byte] &= !mask;
    } else {
        buf[byte] |= mask;
    }
}

/// Read `runlen` consecutive bits starting at bit `start` as an unsigned integer.
pub fn get_run(start: usize, runlen: usize, buf: &[u8]) -> u32 {
    debug_assert!(runlen <= 32, "bit runs are at most 32 bits");
    (start..start + runlen).fold(0u32, |acc, i| (acc << 1) | u32::from(nth_bit(i, buf)))
}

/// Read the `n`th run of `runlen` bits.
///
/// `nth_run(2, 4, &[0xAB, 0xCD])` is `0xC`.
pub fn nth_run(n: usize, runlen: usize, buf: &[u8]) -> u32 {
    get_run(n * runlen, runlen, buf)
}

/// Write the low `runlen` bits of `value` into the `n`th run of `runlen` bits.
pub fn set_run(n: usize, runlen: usize, buf: &mut [u8], value: u32) {
    debug_assert!(runlen <= 32, "bit runs are at most 32 bits");
    let start = n * runlen;
    for i in 0..runlen {
        let shift = runlen - i - 1;
        set_bit(start + i, buf, (value >> shift) & 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_bit_reads_msb_first() {
        assert_eq!(nth_bit(0, &[0xA0]), 1);
        assert_eq!(nth_bit(1, &[0xA0]), 0);
        assert_eq!(nth_bit(2, &[0xA0]), 1);
        assert_eq!(nth_bit(9, &[0xAB, 0xCD]), 1);
    }

    #[test]
    fn set_bit_sets_and_clears() {
        let mut b = [0u8];
        set_bit(0, &mut b, 1);
        assert_eq!(b, [0x80]);

        let mut b = [0u8];
        set_bit(7, &mut b, 1);
        assert_eq!(b, [0x01]);

        let mut b = [0u8];
        set_bit(3, &mut b, 1);
        assert_eq!(b, [0x10]);

        let mut b = [0u8, 0];
        set_bit(13, &mut b, 1);
        assert_eq!(b, [0x00, 0x04]);

        let mut b = [0xFFu8, 0xFF];
        set_bit(13, &mut b, 0);
        assert_eq!(b, [0xFF, 0xFB]);
    }

    #[test]
    fn set_bit_treats_any_nonzero_as_one() {
        let mut b = [0u8];
        set_bit(4, &mut b, 0x400);
        assert_eq!(b, [0x08]);
    }

    #[test]
    fn nth_run_fixtures() {
        assert_eq!(nth_run(0, 2, &[0xC5]), 3);
        assert_eq!(nth_run(1, 2, &[0xC5]), 0);
        assert_eq!(nth_run(2, 2, &[0xC5]), 1);
        assert_eq!(nth_run(2, 4, &[0xAB, 0xCD]), 12);
        assert_eq!(nth_run(2, 11, &[0x01, 0x23, 0x45, 0x67, 0x89]), 0x2CF);
    }

    #[test]
    fn get_run_unaligned_and_empty() {
        // 0xABCD = 1010 1011 1100 1101; bits 3..9 are 0101111
        assert_eq!(get_run(3, 7, &[0xAB, 0xCD]), 0b0101111);
        assert_eq!(get_run(5, 0, &[0xFF]), 0);
    }

    #[test]
    fn get_run_full_width() {
        let buf = [0xDE, 0xAD, 0xBE, 0xEF, 0x00];
        assert_eq!(get_run(0, 32, &buf), 0xDEAD_BEEF);
        assert_eq!(get_run(4, 32, &buf), 0xEADB_EEF0);
    }

    #[test]
    fn set_run_writes_low_bits_only() {
        let mut buf = [0u8; 3];
        set_run(1, 11, &mut buf, 0xFFFF_F801);
        // run 1 occupies bits 11..22 and holds 0b000_0000_0001
        assert_eq!(buf, [0x00, 0x00, 0x04]);
    }

    #[test]
    fn set_run_overwrites_existing_bits() {
        let mut buf = [0xFFu8; 2];
        set_run(1, 4, &mut buf, 0b0101);
        assert_eq!(buf, [0xF5, 0xFF]);
    }

    #[test]
    fn set_then_get_run() {
        let mut buf = [0u8; 6];
        for (n, v) in [0x7FFu32, 0x000, 0x555, 0x2AA].into_iter().enumerate() {
            set_run(n, 11, &mut buf, v);
        }
        assert_eq!(nth_run(0, 11, &buf), 0x7FF);
        assert_eq!(nth_run(1, 11, &buf), 0x000);
        assert_eq!(nth_run(2, 11, &buf), 0x555);
        assert_eq!(nth_run(3, 11, &buf), 0x2AA);
    }
}
