//! Padding of raw bytes out to an 11-bit word boundary with an embedded CRC.
//!
//! The data is followed by `s` spare bits, where `s` is whatever it takes to
//! reach the next multiple of 11 while leaving at least [`MIN_SPARE_BITS`].
//! The spare bits carry the low `s` bits of the data's CRC-8.

use crate::bits::set_bit;
use crate::crc::crc8;

/// Bits per word: a word indexes a 2,048-entry list.
pub const BITS_PER_WORD: usize = 11;

/// Fewest spare bits that ever follow the data.
pub const MIN_SPARE_BITS: usize = 4;

/// Most spare bits that ever follow the data (minimum plus a word minus one).
pub const MAX_SPARE_BITS: usize = MIN_SPARE_BITS + BITS_PER_WORD - 1;

/// Number of words needed to encode `len` bytes of data.
pub fn word_count(len: usize) -> usize {
    (len * 8 + MIN_SPARE_BITS).div_ceil(BITS_PER_WORD)
}

/// Pad `input` to a whole number of words and write its checksum into the spare bits.
///
/// Returns the word count and a buffer of `ceil(11 * words / 8)` bytes.
pub fn pad_data(input: &[u8]) -> (usize, Vec<u8>) {
    let data_bits = input.len() * 8;
    let words = word_count(input.len());
    let total_bits = words * BITS_PER_WORD;

    let mut buf = vec![0u8; total_bits.div_ceil(8)];
    buf[..input.len()].copy_from_slice(input);

    // only the last `spare` bits of the crc fit
    let crc = u32::from(crc8(input));
    let spare = total_bits - data_bits;
    for i in 0..spare {
        let mask = 1u32 << (spare - 1 - i);
        if crc & mask != 0 {
            set_bit(data_bits + i, &mut buf, 1);
        }
    }

    (words, buf)
}
