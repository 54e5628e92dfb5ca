use crate::{error::ParseError, interpreter::lexer::Token};

/// A position cursor over the lexed token list.
///
/// The cursor starts at the first token and never advances past the
/// [`Token::EndOfInput`] sentinel, so [`current`] is always defined. Every
/// terminal check reads the current token's type before consuming it; a
/// mismatch becomes a [`ParseError`] naming the expected terminal and the
/// actual token with its position and source line.
///
/// [`current`]: TokenStream::current
pub struct TokenStream<'a> {
    tokens:   &'a [(Token, usize)],
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`, which must end with the
    /// [`Token::EndOfInput`] sentinel appended by the lexer.
    #[must_use]
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self { tokens, position: 0 }
    }

    /// The token at the cursor, with its source line.
    #[must_use]
    pub fn current(&self) -> &'a (Token, usize) {
        &self.tokens[self.position]
    }

    /// Advances the cursor by one token, staying on the end-of-input
    /// sentinel once it is reached.
    pub fn advance(&mut self) {
        if !matches!(self.current().0, Token::EndOfInput) {
            self.position += 1;
        }
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// # Errors
    /// Returns a `ParseError` naming `name` when the current token differs.
    pub fn expect(&mut self, expected: &Token, name: &str) -> Result<(), ParseError> {
        if self.current().0 == *expected {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(name))
        }
    }

    /// Consumes the current token if it is a property key, returning the
    /// identifier.
    ///
    /// # Errors
    /// Returns a `ParseError` naming `name` when the current token is not a
    /// property key.
    pub fn expect_property_key(&mut self, name: &str) -> Result<String, ParseError> {
        match &self.current().0 {
            Token::PropertyKey(key) => {
                let key = key.clone();
                self.advance();
                Ok(key)
            },
            _ => Err(self.unexpected(name)),
        }
    }

    /// Builds the error for a failed terminal check at the cursor.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let (token, line) = self.current();
        match token {
            Token::EndOfInput => ParseError::UnexpectedEndOfInput { expected: expected.to_owned(),
                                                                    position: self.position,
                                                                    line:     *line, },
            _ => ParseError::UnexpectedToken { expected: expected.to_owned(),
                                               found:    token.to_string(),
                                               position: self.position,
                                               line:     *line, },
        }
    }
}
