//! Text processing utilities for tokenization

mod stop_words;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::error::BookmatchError;

/// Tokens are runs of two or more word characters
static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"\w\w+").expect("token pattern is valid"))
}

/// Stop-word list applied before weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish stop words (catalog source language)
    #[default]
    Spanish,
    /// English stop words
    English,
    /// No stop-word filtering
    None,
}

impl Language {
    /// Whether `term` is a stop word in this language
    pub fn is_stop_word(&self, term: &str) -> bool {
        match self {
            Language::Spanish => stop_words::spanish().contains(term),
            Language::English => stop_words::english().contains(term),
            Language::None => false,
        }
    }

    fn stemming_algorithm(&self) -> Option<Algorithm> {
        match self {
            Language::Spanish => Some(Algorithm::Spanish),
            Language::English => Some(Algorithm::English),
            Language::None => None,
        }
    }
}

impl FromStr for Language {
    type Err = BookmatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spanish" | "es" => Ok(Language::Spanish),
            "english" | "en" => Ok(Language::English),
            "none" => Ok(Language::None),
            other => Err(BookmatchError::unsupported(
                "language",
                other,
                "spanish, english, none",
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Spanish => write!(f, "spanish"),
            Language::English => write!(f, "english"),
            Language::None => write!(f, "none"),
        }
    }
}

/// Lowercasing tokenizer with stop-word removal and optional Snowball stemming
pub struct Tokenizer {
    language: Language,
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    /// Create a tokenizer for `language`
    ///
    /// Stemming requires a concrete language; asking for it with
    /// [`Language::None`] fails with `Unsupported`.
    pub fn new(language: Language, stem: bool) -> crate::error::Result<Self> {
        let stemmer = if stem {
            match language.stemming_algorithm() {
                Some(algorithm) => Some(Stemmer::create(algorithm)),
                None => crate::bail_unsupported!("stemming language", language, "spanish, english"),
            }
        } else {
            None
        };

        Ok(Tokenizer { language, stemmer })
    }

    /// Stop-word language of this tokenizer
    pub fn language(&self) -> Language {
        self.language
    }

    /// Split `text` into terms, dropping stop words
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        token_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.language.is_stop_word(token))
            .map(|token| match &self.stemmer {
                Some(stemmer) => stemmer.stem(token).into_owned(),
                None => token.to_string(),
            })
            .collect()
    }
}
