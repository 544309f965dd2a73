#![no_main]

use libfuzzer_sys::fuzz_target;
use ndau_words::WordsError;

// Decoding arbitrary text must never panic, and anything that does decode
// must re-encode to the same (lowercased) words.
fuzz_target!(|phrase: &str| {
    match ndau_words::bytes_from_phrase("en", phrase) {
        Ok(data) => {
            assert!(!data.is_empty());
            let words = ndau_words::words_from_bytes("en", &data).unwrap();
            let expected: Vec<String> = phrase
                .split_ascii_whitespace()
                .map(str::to_lowercase)
                .collect();
            assert_eq!(words, expected);
        }
        Err(WordsError::UnknownWord(_) | WordsError::ChecksumMismatch) => {}
        Err(e) => panic!("unexpected error {e}"),
    }
});
