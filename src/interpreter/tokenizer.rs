use logos::Logos;

use crate::interpreter::lexer::Word;

/// Splits a raw input line into the tokens the evaluator consumes.
///
/// The first token names the operator; every following token is an operand
/// literal. Implementations never fail: any string yields a sequence, possibly
/// empty.
pub trait Tokenizer {
    /// Splits `input` into an ordered sequence of tokens.
    fn tokenize(&self, input: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, input: &str) -> Vec<String> {
        (**self).tokenize(input)
    }
}

/// The default tokenizer: splits on every single space character.
///
/// Runs of spaces are not collapsed, so `"+  2 2"` produces an empty token
/// that counts as an operand. Empty input yields one empty token.
///
/// # Example
/// ```
/// use polcalc::interpreter::tokenizer::{SpaceTokenizer, Tokenizer};
///
/// assert_eq!(SpaceTokenizer.tokenize("+ 2 2"), vec!["+", "2", "2"]);
/// assert_eq!(SpaceTokenizer.tokenize("+  2"), vec!["+", "", "2"]);
/// assert_eq!(SpaceTokenizer.tokenize(""), vec![""]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input.split(' ').map(str::to_string).collect()
    }
}

/// An alternate tokenizer that treats any run of whitespace as one separator.
///
/// Leading and trailing whitespace is dropped, so blank input yields no tokens
/// at all.
///
/// # Example
/// ```
/// use polcalc::interpreter::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// assert_eq!(WhitespaceTokenizer.tokenize("  +\t2   2 "), vec!["+", "2", "2"]);
/// assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        Word::lexer(input).spanned()
                          .filter(|(word, _)| word.is_ok())
                          .map(|(_, span)| input[span].to_string())
                          .collect()
    }
}
