//! Mnemonic word codec for ndau key material.
//!
//! Maps an arbitrary byte string to a phrase of words from a 2,048-word list
//! and back. Each word carries 11 bits; the bits left over between the end of
//! the data and the end of the last word hold the low bits of a CRC-8 of the
//! data, so a mistyped or reordered phrase is caught on decode.
//!
//! Unlike BIP-39 the data length is not fixed: anything from one byte up is
//! accepted, and the decoder recovers the length from the word count.
//!
//! ```
//! let words = ndau_words::words_from_bytes("en", &[0x00, 0x01, 0x02]).unwrap();
//! assert_eq!(words, ["abandon", "amount", "mom"]);
//! assert_eq!(ndau_words::bytes_from_words("en", &words).unwrap(), [0x00, 0x01, 0x02]);
//! ```

pub mod bits;
pub mod crc;
pub mod decode;
pub mod encode;
pub mod error;
pub mod language;
pub mod pad;
pub mod wordlist;

pub use crc::crc8;
pub use decode::{bytes_from_phrase, bytes_from_words, validate_phrase};
pub use encode::{phrase_from_bytes, words_from_bytes};
pub use error::WordsError;
pub use language::{wordlist, Language};
pub use pad::{pad_data, word_count, BITS_PER_WORD};
pub use wordlist::{Wordlist, WORDLIST_LEN};
