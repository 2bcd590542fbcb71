//! Whitespace-preserving tokenization
//!
//! Splits text into alternating runs of word and whitespace characters. The
//! differ only aligns the word runs, so whitespace changes never show up as
//! edits.

use serde::{Deserialize, Serialize};

/// Kind of a token run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Whitespace,
}

/// A maximal run of word or whitespace characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Split `text` into tokens covering the whole input, left to right.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (idx, ch) in text.char_indices() {
        let kind = if ch.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Word
        };

        match current {
            Some(prev) if prev == kind => {}
            Some(prev) => {
                tokens.push(Token {
                    kind: prev,
                    text: text[start..idx].to_string(),
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            kind,
            text: text[start..].to_string(),
        });
    }

    tokens
}

/// Word tokens only, in order
pub fn words(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(Token::is_word)
        .map(|token| token.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn test_tokens_partition_input() {
        let text = "  Buy now,\tsave\n\nbig!  ";
        let tokens = tokenize(text);

        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, text);

        // Runs must alternate
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_words_ignore_whitespace_shape() {
        assert_eq!(words("Hello   brave\nnew world."), vec!["Hello", "brave", "new", "world."]);
        assert_eq!(words(" \t\n "), Vec::<String>::new());
    }

    #[test]
    fn test_multibyte_characters() {
        let tokens = tokenize("café  naïve");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[2].text, "naïve");
    }
}
