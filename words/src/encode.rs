//! Bytes to words.

use crate::bits::nth_run;
use crate::language::wordlist;
use crate::pad::{pad_data, BITS_PER_WORD};
use crate::WordsError;

/// Encode `data` as words from the `lang` wordlist.
///
/// The phrase has `ceil((8 * len + 4) / 11)` words; the trailing bits of the
/// last word carry a CRC-8 of `data`.
pub fn words_from_bytes(lang: &str, data: &[u8]) -> Result<Vec<&'static str>, WordsError> {
    let list = wordlist(lang)?;
    if data.is_empty() {
        return Err(WordsError::EmptyInput);
    }

    let (nwords, padded) = pad_data(data);
    tracing::trace!(bytes = data.len(), words = nwords, "encoding phrase");

    Ok((0..nwords)
        .map(|w| list.word(nth_run(w, BITS_PER_WORD, &padded) as u16))
        .collect())
}

/// Encode `data` as a single space-separated phrase.
pub fn phrase_from_bytes(lang: &str, data: &[u8]) -> Result<String, WordsError> {
    words_from_bytes(lang, data).map(|words| words.join(" "))
}
