//! CRC-8 with generator polynomial `0x1D`.
//!
//! Zero initial value, no reflection, no final XOR. An all-zero input
//! therefore always has a CRC of zero.

/// Generator polynomial (x^8 + x^4 + x^3 + x^2 + 1, high bit implicit).
pub const CRC8_POLY: u8 = 0x1D;

/// Per-byte remainders, computed at compile time.
const CRC8_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC8_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Compute the CRC-8 of `data`.
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0, |crc, &byte| CRC8_TABLE[(crc ^ byte) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight bit-at-a-time reference.
    fn crc8_bitwise(data: &[u8]) -> u8 {
        let mut crc = 0u8;
        for &byte in data {
            crc ^= byte;
            for _ in 0..8 {
                if crc & 0x80 != 0 {
                    crc = (crc << 1) ^ CRC8_POLY;
                } else {
                    crc <<= 1;
                }
            }
        }
        crc
    }

    #[test]
    fn fixed_points() {
        assert_eq!(crc8(&[]), 0);
        assert_eq!(crc8(&[0x00]), 0x00);
        assert_eq!(crc8(&[0x00, 0x00]), 0x00);
        assert_eq!(crc8(&[0x01]), 0x1D);
        assert_eq!(crc8(&[0x01, 0x02, 0x03, 0x04]), 62);
        assert_eq!(crc8(b"This is a test"), 214);
        assert_eq!(crc8(b"this is a test"), 59);
    }

    #[test]
    fn check_value() {
        // CRC-8/0x1D with zero init over the standard "123456789" check string
        assert_eq!(crc8(b"123456789"), 55);
    }

    #[test]
    fn table_matches_bitwise() {
        for b in 0..=255u8 {
            assert_eq!(crc8(&[b]), crc8_bitwise(&[b]), "byte {b:#04x}");
        }
        let data: Vec<u8> = (0..=255u8).rev().collect();
        assert_eq!(crc8(&data), crc8_bitwise(&data));
    }

    #[test]
    fn single_bit_flip_changes_crc() {
        let data = *b"ndau key material";
        let base = crc8(&data);
        for i in 0..data.len() * 8 {
            let mut flipped = data;
            flipped[i / 8] ^= 1 << (7 - i % 8);
            assert_ne!(crc8(&flipped), base, "flip of bit {i} went undetected");
        }
    }
}
