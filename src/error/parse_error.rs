#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// A terminal check failed: the grammar required one terminal but the
    /// stream held another.
    UnexpectedToken {
        /// The terminal the grammar expected at this position.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// The cursor position in the token stream, in tokens.
        position: usize,
        /// The source line of the offending token.
        line:     usize,
    },
    /// The input ended where the grammar required another terminal.
    UnexpectedEndOfInput {
        /// The terminal the grammar expected at this position.
        expected: String,
        /// The cursor position in the token stream, in tokens.
        position: usize,
        /// The source line where the input ended.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position,
                                    line, } => {
                write!(f,
                       "Error on line {line}: Expected {expected}, found {found} (token {position}).")
            },
            Self::UnexpectedEndOfInput { expected,
                                         position,
                                         line, } => {
                write!(f,
                       "Error on line {line}: Expected {expected}, but the input ended (token {position}).")
            },
        }
    }
}

impl std::error::Error for ParseError {}
