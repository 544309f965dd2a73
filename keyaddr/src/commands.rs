//! Subcommands and how their results are printed.

use anyhow::{anyhow, Context};
use serde::Serialize;

use ndau_words::Language;

use crate::config::{KeyaddrConfig, OutputFormat};

/// Largest random key `random` will generate, in bytes.
const MAX_RANDOM_LEN: i64 = 32;

/// Draws `random` makes before giving up on finding a phrase that decodes
/// back to its own key.
const MAX_RANDOM_DRAWS: usize = 8;

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Encode hex bytes (e.g. 0fda68) as a phrase.
    Words {
        /// Bytes in hex; `0x` prefix, spaces and colons are ignored.
        hex: String,
    },

    /// Decode a phrase back to hex bytes.
    Bytes {
        /// The words, either separately or as one quoted phrase.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Check that a phrase decodes; exits nonzero if it does not.
    Check {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Print the wordlist index of a word.
    Lookup { word: String },

    /// Generate random bytes from the OS RNG and print them with their phrase.
    Random {
        /// Number of bytes.
        #[arg(
            long,
            default_value_t = 16,
            value_parser = clap::value_parser!(u8).range(1..=MAX_RANDOM_LEN)
        )]
        len: u8,
    },
}

/// A command's result, printable as text or JSON.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Output {
    Words {
        language: &'static str,
        words: Vec<&'static str>,
    },
    Bytes {
        language: &'static str,
        hex: String,
    },
    Valid {
        bytes: usize,
    },
    Index {
        word: String,
        index: u16,
    },
    Random {
        hex: String,
        words: Vec<&'static str>,
    },
}

impl Output {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize output")
            }
            OutputFormat::Text => Ok(match self {
                Self::Words { words, .. } => words.join(" "),
                Self::Bytes { hex, .. } => hex.clone(),
                Self::Valid { bytes } => format!("valid ({bytes} bytes)"),
                Self::Index { index, .. } => index.to_string(),
                Self::Random { hex, words } => format!("{hex}\n{}", words.join(" ")),
            }),
        }
    }
}

/// Run `command` with the resolved configuration.
pub fn run(command: &Command, config: &KeyaddrConfig) -> anyhow::Result<Output> {
    let language = Language::from_tag(&config.language)?;
    tracing::debug!(?command, %language, "running command");

    match command {
        Command::Words { hex } => {
            let data = ndau_utils::parse_hex_bytes(hex)?;
            let words = ndau_words::words_from_bytes(language.tag(), &data)?;
            Ok(Output::Words {
                language: language.tag(),
                words,
            })
        }
        Command::Bytes { words } => {
            let data = decode_phrase(language, words)?;
            Ok(Output::Bytes {
                language: language.tag(),
                hex: hex::encode(data),
            })
        }
        Command::Check { words } => {
            let data = decode_phrase(language, words)?;
            Ok(Output::Valid { bytes: data.len() })
        }
        Command::Lookup { word } => {
            let index = language.wordlist().lookup(&word.to_lowercase())?;
            Ok(Output::Index {
                word: word.clone(),
                index,
            })
        }
        Command::Random { len } => {
            let (data, words) = random_phrase(language, usize::from(*len), |buf| {
                getrandom::getrandom(buf)
                    .map_err(|e| anyhow!("failed to read OS randomness: {e}"))
            })?;
            Ok(Output::Random {
                hex: hex::encode(data),
                words,
            })
        }
    }
}

/// Fill a `len`-byte key with `fill` and encode it, redrawing whenever the
/// phrase would decode to a shorter key.
///
/// A phrase can also verify as the key minus its last byte (about one draw in
/// 4,096 for 16 bytes), and decoding always prefers the shorter length.
fn random_phrase<F>(
    language: Language,
    len: usize,
    mut fill: F,
) -> anyhow::Result<(Vec<u8>, Vec<&'static str>)>
where
    F: FnMut(&mut [u8]) -> anyhow::Result<()>,
{
    let mut data = vec![0u8; len];
    for draw in 1..=MAX_RANDOM_DRAWS {
        fill(&mut data)?;
        let words = ndau_words::words_from_bytes(language.tag(), &data)?;
        if ndau_words::bytes_from_words(language.tag(), &words)? == data {
            return Ok((data, words));
        }
        tracing::debug!(draw, len, "phrase decodes to a shorter key, redrawing");
    }
    Err(anyhow!("no restorable phrase after {MAX_RANDOM_DRAWS} random draws"))
}

/// Decode words given either one per argument or as one quoted phrase.
fn decode_phrase(language: Language, words: &[String]) -> anyhow::Result<Vec<u8>> {
    let phrase = words.join(" ");
    ndau_words::bytes_from_phrase(language.tag(), &phrase)
        .with_context(|| format!("cannot decode phrase \"{phrase}\""))
}
