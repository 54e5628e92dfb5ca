use logos::{Lexer, Logos, Skip};

use crate::error::LexError;

/// Represents a lexical token of the template language.
///
/// Everything outside `{{ }}` delimiters is literal text; adjacent literal
/// runs merge into a single [`Token::Text`]. Inside a directive the keywords
/// `if`, `for`, `in`, `else` and `end` lex to their own token types, any
/// other identifier lexes to [`Token::PropertyKey`], and a dotted identifier
/// lexes as alternating property keys and accessors which the parser
/// reassembles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal run of template text.
    Text(String),
    /// An identifier segment inside a directive.
    PropertyKey(String),
    /// `if`
    If,
    /// `for`
    For,
    /// `in`
    In,
    /// `else`
    Else,
    /// `end`
    End,
    /// `.`, joining the segments of a dotted identifier.
    Accessor,
    /// The sentinel appended after the last real token. The parser's cursor
    /// never advances past it.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "text {value:?}"),
            Self::PropertyKey(key) => write!(f, "property key '{key}'"),
            Self::If => write!(f, "'if'"),
            Self::For => write!(f, "'for'"),
            Self::In => write!(f, "'in'"),
            Self::Else => write!(f, "'else'"),
            Self::End => write!(f, "'end'"),
            Self::Accessor => write!(f, "'.'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed, in literal text and inside
/// directives alike.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Text-mode tokens: everything up to the next directive opener.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// `{{`, switching the lexer into directive mode.
    #[token("{{")]
    OpenDirective,
    /// A lone `{` that does not open a directive; part of the literal text.
    #[token("{")]
    Brace,
    /// A maximal run of literal characters.
    #[regex(r"[^{]+", count_newlines)]
    Literal,
}

/// Directive-mode tokens: everything between `{{` and `}}`.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f\r]+")]
enum DirectiveToken {
    /// `}}`, switching the lexer back into text mode.
    #[token("}}")]
    Close,
    /// `if`
    #[token("if")]
    If,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `.`
    #[token(".")]
    Accessor,
    /// Identifier segments; keyword spellings win by token priority.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    PropertyKey(String),
    /// Newlines inside a directive are skipped but counted.
    #[token("\n", count_directive_newline)]
    NewLine,
}

/// Counts the newlines in a literal run while keeping the token.
fn count_newlines(lex: &mut Lexer<RawToken>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// Counts a newline inside a directive and skips it.
fn count_directive_newline(lex: &mut Lexer<DirectiveToken>) -> Skip {
    lex.extras.line += 1;
    Skip
}

/// Tokenizes template source into `(token, line)` pairs.
///
/// Adjacent literal runs are merged into single [`Token::Text`] tokens and
/// the [`Token::EndOfInput`] sentinel is appended after the last real token,
/// so the result is never empty.
///
/// # Parameters
/// - `source`: Raw template text.
///
/// # Returns
/// The ordered token list, each paired with its source line.
///
/// # Errors
/// - `LexError::UnclosedDirective` if a `{{` is never matched by `}}`.
/// - `LexError::UnexpectedSymbol` if a directive contains a character that
///   is not a keyword, identifier, accessor or delimiter.
pub fn lex(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut text_line = 1;
    let mut raw = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    loop {
        let line = raw.extras.line;
        let Some(piece) = raw.next() else {
            break;
        };

        match piece {
            Ok(RawToken::OpenDirective) => {
                flush_text(&mut tokens, &mut text, text_line);
                raw = lex_directive(raw.morph(), line, &mut tokens)?;
            },
            Ok(RawToken::Brace | RawToken::Literal) => {
                if text.is_empty() {
                    text_line = line;
                }
                text.push_str(raw.slice());
            },
            Err(()) => {
                return Err(LexError::UnexpectedSymbol { symbol: raw.slice().to_owned(),
                                                        line });
            },
        }
    }

    flush_text(&mut tokens, &mut text, text_line);
    tokens.push((Token::EndOfInput, raw.extras.line));
    Ok(tokens)
}

/// Lexes one directive body, from just after `{{` to just after `}}`,
/// returning the lexer morphed back into text mode.
fn lex_directive<'a>(mut directive: Lexer<'a, DirectiveToken>,
                     open_line: usize,
                     tokens: &mut Vec<(Token, usize)>)
                     -> Result<Lexer<'a, RawToken>, LexError> {
    loop {
        let line = directive.extras.line;
        match directive.next() {
            None => return Err(LexError::UnclosedDirective { line: open_line }),
            Some(Err(())) => {
                return Err(LexError::UnexpectedSymbol { symbol: directive.slice().to_owned(),
                                                        line });
            },
            Some(Ok(DirectiveToken::Close)) => return Ok(directive.morph()),
            Some(Ok(token)) => tokens.push((convert(token), line)),
        }
    }
}

fn convert(token: DirectiveToken) -> Token {
    match token {
        DirectiveToken::If => Token::If,
        DirectiveToken::For => Token::For,
        DirectiveToken::In => Token::In,
        DirectiveToken::Else => Token::Else,
        DirectiveToken::End => Token::End,
        DirectiveToken::Accessor => Token::Accessor,
        DirectiveToken::PropertyKey(key) => Token::PropertyKey(key),
        DirectiveToken::Close | DirectiveToken::NewLine => {
            unreachable!("handled by the directive loop")
        },
    }
}

fn flush_text(tokens: &mut Vec<(Token, usize)>, text: &mut String, line: usize) {
    if !text.is_empty() {
        tokens.push((Token::Text(std::mem::take(text)), line));
    }
}
