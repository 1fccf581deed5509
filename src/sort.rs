//! Natural filename ordering.
//!
//! Splits a name into digit runs and text runs so that `track2.mp3` sorts
//! before `track10.mp3` instead of after it.

use std::cmp::Ordering;

/// One token of a natural sort key.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    /// A digit run with leading zeros stripped. Compared numerically:
    /// shorter digit strings are smaller, equal lengths compare as text.
    Number(String),
    /// A non-digit run, lowercased.
    Text(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // A number at a position where the other name has text sorts
            // first. Cannot arise for names sharing a non-numeric prefix.
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the sort key for a name.
fn sort_key(name: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut in_digits = false;

    let flush = |run: &mut String, in_digits: bool, tokens: &mut Vec<Token>| {
        if run.is_empty() {
            return;
        }
        if in_digits {
            let trimmed = run.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            tokens.push(Token::Number(digits.to_string()));
        } else {
            tokens.push(Token::Text(run.to_lowercase()));
        }
        run.clear();
    };

    for c in name.chars() {
        let is_digit = c.is_ascii_digit();
        if is_digit != in_digits {
            flush(&mut run, in_digits, &mut tokens);
            in_digits = is_digit;
        }
        run.push(c);
    }
    flush(&mut run, in_digits, &mut tokens);

    tokens
}

/// Compare two names naturally. Pure; suitable for `sort_by`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}
