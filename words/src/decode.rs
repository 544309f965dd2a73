//! Words to bytes.
//!
//! A phrase of `n` words carries `11n` bits. Two data lengths can share the
//! same word count (1 and 2 bytes both take 2 words), so the decoder tries both
//! and keeps the first whose checksum verifies. The shorter length goes first:
//! it leaves more spare bits and so has the stronger check.

use crate::bits::{get_run, set_run};
use crate::crc::crc8;
use crate::language::wordlist;
use crate::pad::{BITS_PER_WORD, MAX_SPARE_BITS, MIN_SPARE_BITS};
use crate::WordsError;

/// Decode a phrase produced by [`words_from_bytes`](crate::words_from_bytes).
pub fn bytes_from_words<S: AsRef<str>>(lang: &str, words: &[S]) -> Result<Vec<u8>, WordsError> {
    let list = wordlist(lang)?;

    let total_bits = words.len() * BITS_PER_WORD;
    let mut buf = vec![0u8; total_bits.div_ceil(8)];
    for (n, word) in words.iter().enumerate() {
        let index = list.lookup(word.as_ref())?;
        set_run(n, BITS_PER_WORD, &mut buf, u32::from(index));
    }

    let whole_bytes = total_bits / 8;
    for len in [whole_bytes.checked_sub(1), Some(whole_bytes)]
        .into_iter()
        .flatten()
    {
        let spare = total_bits - len * 8;
        if len == 0 || !(MIN_SPARE_BITS..=MAX_SPARE_BITS).contains(&spare) {
            continue;
        }

        let mask = (1u32 << spare) - 1;
        let expected = u32::from(crc8(&buf[..len])) & mask;
        let found = get_run(len * 8, spare, &buf);
        if expected == found {
            tracing::trace!(words = words.len(), bytes = len, spare, "checksum verified");
            buf.truncate(len);
            return Ok(buf);
        }
        tracing::debug!(
            words = words.len(),
            bytes = len,
            spare,
            "checksum rejected candidate length"
        );
    }

    Err(WordsError::ChecksumMismatch)
}

/// Decode a whitespace-separated phrase. Words are matched case-insensitively.
pub fn bytes_from_phrase(lang: &str, phrase: &str) -> Result<Vec<u8>, WordsError> {
    let words: Vec<String> = phrase
        .split_ascii_whitespace()
        .map(str::to_lowercase)
        .collect();
    bytes_from_words(lang, &words)
}

/// Whether `words` decodes cleanly.
pub fn validate_phrase<S: AsRef<str>>(lang: &str, words: &[S]) -> bool {
    bytes_from_words(lang, words).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> Vec<&str> {
        s.split(' ').collect()
    }

    #[test]
    fn simple_phrase() {
        assert_eq!(
            bytes_from_words("en", &["abandon", "amount", "mom"]).unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn sixteen_bytes() {
        let words =
            split("abandon amount liar amount expire adjust cage candy arch gather drum bundle");
        let expected: Vec<u8> = (0..16).collect();
        assert_eq!(bytes_from_words("en", &words).unwrap(), expected);
    }

    #[test]
    fn accepts_owned_strings() {
        let words: Vec<String> = split("average spy bicycle")
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(
            bytes_from_words("en", &words).unwrap(),
            vec![0x0F, 0xDA, 0x68]
        );
    }

    #[test]
    fn unknown_language() {
        assert_eq!(
            bytes_from_words("sp", &["abandon", "amount", "mom"]),
            Err(WordsError::UnknownLanguage("sp".into()))
        );
    }

    #[test]
    fn unknown_word_is_reported() {
        assert_eq!(
            bytes_from_words("en", &["abandon", "foo", "mom"]),
            Err(WordsError::UnknownWord("foo".into()))
        );
    }

    #[test]
    fn changed_word_fails_checksum() {
        assert_eq!(
            bytes_from_words("en", &["abandon", "amount", "moment"]),
            Err(WordsError::ChecksumMismatch)
        );
    }

    #[test]
    fn single_word_never_decodes() {
        // 11 bits hold either no data or one byte with only 3 spare bits
        for w in ["abandon", "zoo", "roof"] {
            assert_eq!(
                bytes_from_words("en", &[w]),
                Err(WordsError::ChecksumMismatch)
            );
        }
    }

    #[test]
    fn empty_phrase_never_decodes() {
        let empty: [&str; 0] = [];
        assert_eq!(
            bytes_from_words("en", &empty),
            Err(WordsError::ChecksumMismatch)
        );
    }

    #[test]
    fn spare_width_outside_range_is_not_a_candidate() {
        // 88 bits: 10 bytes fail their 8-bit check, 11 bytes would leave s = 0
        assert_ne!(crc8(&[0xFF; 10]), 0xFF);
        assert_eq!(
            bytes_from_words("en", &["zoo"; 8]),
            Err(WordsError::ChecksumMismatch)
        );

        // 55 bits: the 6-byte check fails; 5 bytes would need s = 15, although
        // the trailing 15 bits do hold crc8 of 00 01 02 03 04
        let words = split("abandon amount liar amount amazing");
        let v = (0..5).fold(0u64, |acc, i| {
            let index = wordlist("en").unwrap().lookup(words[i]).unwrap();
            (acc << BITS_PER_WORD) | u64::from(index)
        });
        assert_eq!(v & 0x7FFF, u64::from(crc8(&[0, 1, 2, 3, 4])));
        assert_eq!(
            bytes_from_words("en", &words),
            Err(WordsError::ChecksumMismatch)
        );
    }

    #[test]
    fn shorter_length_wins_when_both_verify() {
        // [0x00, 0x00] encodes to "abandon abandon", but so does [0x00]
        assert_eq!(
            bytes_from_words("en", &["abandon", "abandon"]).unwrap(),
            vec![0x00]
        );
        assert_eq!(
            bytes_from_words("en", &["artist", "awake"]).unwrap(),
            vec![0x0D]
        );
    }

    #[test]
    fn two_words_decode_to_either_length() {
        assert_eq!(
            bytes_from_words("en", &["absurd", "admit"]).unwrap(),
            vec![0x01]
        );
        assert_eq!(
            bytes_from_words("en", &["absurd", "bitter"]).unwrap(),
            vec![0x01, 0x02]
        );
    }

    #[test]
    fn phrase_is_case_and_space_tolerant() {
        assert_eq!(
            bytes_from_phrase("en", "  Average\tSPY  bicycle\n").unwrap(),
            vec![0x0F, 0xDA, 0x68]
        );
    }

    #[test]
    fn validate() {
        assert!(validate_phrase("en", &["average", "spy", "bicycle"]));
        assert!(!validate_phrase("en", &["average", "spy", "bike"]));
        assert!(!validate_phrase("sp", &["average", "spy", "bicycle"]));
    }
}
