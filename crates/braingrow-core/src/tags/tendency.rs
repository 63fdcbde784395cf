//! Tendency signal tokenizer.
//!
//! The stored "tendency" value is an opaque legacy signal: either a JSON
//! object whose keys name boards/topics, or a comma/space delimited string.
//! Tokenizing normalizes both forms into a set of lower-cased tokens used
//! to match catalog board and topic names.

use std::collections::BTreeSet;

use serde_json::Value;

/// Parse result for a raw tendency signal, with the fallback order made
/// explicit: the JSON-object form is tried first, everything else takes
/// the delimited-string path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TendencyTokens {
    /// Tokens taken from the keys of a JSON object.
    ///
    /// The associated values are ignored entirely: a key mapped to `false`
    /// still yields a token. Historical stored data relies on this, so it
    /// must not be "fixed" here.
    Structured(BTreeSet<String>),
    /// Tokens split out of a delimited string (commas, then whitespace).
    Delimited(BTreeSet<String>),
}

impl TendencyTokens {
    /// Parses a raw tendency signal. Never fails: absent or malformed
    /// input degrades to the delimited path, which at worst yields an
    /// empty set.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Self::Delimited(BTreeSet::new()),
        };

        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) {
            let tokens = map.keys().map(|key| key.to_lowercase()).collect();
            return Self::Structured(tokens);
        }

        // Commas first, then whitespace within each chunk.
        let tokens = raw
            .split(',')
            .flat_map(|chunk| chunk.split_whitespace())
            .map(|piece| piece.trim().to_lowercase())
            .filter(|piece| !piece.is_empty())
            .collect();
        Self::Delimited(tokens)
    }

    /// The normalized token set, regardless of which form produced it.
    pub fn tokens(&self) -> &BTreeSet<String> {
        match self {
            Self::Structured(tokens) | Self::Delimited(tokens) => tokens,
        }
    }

    /// Consumes the parse result, returning the token set.
    pub fn into_tokens(self) -> BTreeSet<String> {
        match self {
            Self::Structured(tokens) | Self::Delimited(tokens) => tokens,
        }
    }

    /// Returns true when no tokens were extracted.
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}

/// Normalizes a raw tendency signal into a set of lower-cased tokens.
pub fn tokenize(raw: Option<&str>) -> BTreeSet<String> {
    TendencyTokens::parse(raw).into_tokens()
}
