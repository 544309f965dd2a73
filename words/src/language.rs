//! Language tags and the wordlist registry.

use std::fmt;
use std::str::FromStr;

use crate::wordlist::Wordlist;
use crate::WordsError;

/// A language with a compiled-in wordlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// BIP-39 English.
    English,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 1] = [Language::English];

    /// Resolve a language tag such as `"en"`. Tags match exactly.
    pub fn from_tag(tag: &str) -> Result<Self, WordsError> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag() == tag)
            .ok_or_else(|| WordsError::UnknownLanguage(tag.to_string()))
    }

    /// Short tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }

    pub fn wordlist(&self) -> Wordlist {
        match self {
            Self::English => Wordlist::english(),
        }
    }
}

impl FromStr for Language {
    type Err = WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Look up the wordlist registered for `tag`.
pub fn wordlist(tag: &str) -> Result<Wordlist, WordsError> {
    Language::from_tag(tag).map(|lang| lang.wordlist())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_tag_resolves() {
        assert_eq!(Language::from_tag("en"), Ok(Language::English));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!(Language::English.to_string(), "en");
    }

    #[test]
    fn unknown_tags_rejected() {
        for tag in ["sp", "", "EN", "en-US", "english"] {
            assert_eq!(
                Language::from_tag(tag),
                Err(WordsError::UnknownLanguage(tag.to_string()))
            );
        }
    }

    #[test]
    fn registry_returns_wordlist() {
        let list = wordlist("en").unwrap();
        assert_eq!(list.word(0), "abandon");
        assert!(matches!(
            wordlist("sp"),
            Err(WordsError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn every_language_has_a_full_sorted_list() {
        for lang in Language::ALL {
            let list = lang.wordlist();
            assert_eq!(list.len(), crate::WORDLIST_LEN, "{lang}");
            assert!(list.words().windows(2).all(|w| w[0] < w[1]), "{lang}");
        }
    }
}
