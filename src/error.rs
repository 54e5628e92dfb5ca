/// Lexical errors.
///
/// Defines the errors raised while splitting template source into tokens:
/// directives that are opened but never closed, and characters a directive
/// cannot contain.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while building the syntax tree from tokens.
/// Every parse error names the terminal the grammar expected and the token
/// actually found, with its position and source line.
pub mod parse_error;
/// Rendering errors.
///
/// Contains all error types that can be raised during evaluation and
/// template loading: unresolvable identifiers, values of the wrong kind for
/// their context, and missing template source.
pub mod render_error;
/// The umbrella error returned by engine entry points.
///
/// Wraps the lexing, parsing and rendering errors into one type so callers
/// handle a single failure channel per render.
pub mod template_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use render_error::RenderError;
pub use template_error::TemplateError;
