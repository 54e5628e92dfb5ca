/// Core grammar functions and the parse entry point.
///
/// Contains the recursive-descent functions for statements, `if` and `for`
/// blocks and dotted identifiers.
pub mod core;

/// The token stream cursor.
///
/// Wraps the lexed token list with a position cursor that never advances
/// past the end-of-input sentinel, plus the terminal checks every grammar
/// function consumes tokens through.
pub mod stream;
