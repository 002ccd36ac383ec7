use logos::Logos;

/// A whitespace-delimited word in an input line.
///
/// Used by [`WhitespaceTokenizer`](crate::interpreter::tokenizer::WhitespaceTokenizer);
/// every maximal run of non-whitespace characters is one word and whitespace
/// between words is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Word {
    /// Any run of non-whitespace characters, such as `sqrt` or `-2.5`.
    #[regex(r"[^ \t\r\n\f]+")]
    Text,
}
