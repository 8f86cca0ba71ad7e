//! Symbols and character classification policies.
//!
//! A symbol is what one input character counts as: the character itself or
//! the name of a bucket it falls into. Which characters are counted at all,
//! and how they are bucketed, is decided by a [`Classifier`].

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HuffError;

/// A classified symbol. Compared by exact string equality.
pub type Symbol = CompactString;

/// Maps an input character to the symbol it is counted as.
///
/// Returning `None` removes the character from the symbol space: it is
/// neither counted nor encoded.
pub trait Classifier {
    fn classify(&self, ch: char) -> Option<Symbol>;

    /// Classify every character of `text`, skipping ignored ones.
    fn symbols<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Symbol> + 'a
    where
        Self: Sized,
    {
        text.chars().filter_map(move |ch| self.classify(ch))
    }
}

impl<F> Classifier for F
where
    F: Fn(char) -> Option<Symbol>,
{
    fn classify(&self, ch: char) -> Option<Symbol> {
        self(ch)
    }
}

/// Built-in classification policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Every character is its own symbol. Lossless.
    #[default]
    Identity,
    /// Only letters and digits are counted, each as itself.
    Alphanumeric,
    /// Letters and digits as themselves, whitespace and punctuation bucketed.
    Bucketed,
}

impl Policy {
    /// All built-in policies.
    pub const ALL: [Policy; 3] = [Policy::Identity, Policy::Alphanumeric, Policy::Bucketed];

    /// Configuration name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Identity => "identity",
            Policy::Alphanumeric => "alphanumeric",
            Policy::Bucketed => "bucketed",
        }
    }

    /// Whether decoding reproduces the input text exactly.
    pub fn is_lossless(&self) -> bool {
        matches!(self, Policy::Identity)
    }
}

impl Classifier for Policy {
    fn classify(&self, ch: char) -> Option<Symbol> {
        match self {
            Policy::Identity => Some(literal(ch)),
            Policy::Alphanumeric => is_letter_or_digit(ch).then(|| literal(ch)),
            Policy::Bucketed => Some(bucket(ch)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HuffError::InvalidArgument(format!("unknown policy: {}", s)))
    }
}

/// Letters and decimal digits.
///
/// Numeric letters (`Ⅻ`) and other numerics (`²`, `½`) are excluded. Only
/// ASCII digits count as decimal digits.
fn is_letter_or_digit(ch: char) -> bool {
    (ch.is_alphabetic() && !ch.is_numeric()) || ch.is_ascii_digit()
}

fn literal(ch: char) -> Symbol {
    let mut buf = [0u8; 4];
    CompactString::new(ch.encode_utf8(&mut buf))
}

fn bucket(ch: char) -> Symbol {
    let name = if ch.is_whitespace() {
        match ch {
            ' ' => "Space",
            '\t' => "Tab",
            '\n' => "Newline",
            _ => "Other",
        }
    } else if is_letter_or_digit(ch) {
        return literal(ch);
    } else {
        match ch {
            '\'' | '"' => "Quote",
            '(' | ')' | '[' | ']' | '{' | '}' => "Bracket",
            ',' | '.' | ';' | ':' => "Punctuation",
            _ => "Other",
        }
    };

    CompactString::new(name)
}
