use crate::error::{LexError, ParseError, RenderError};

#[derive(Debug)]
/// The single failure channel of a render: lexing, parsing or evaluation.
///
/// Engine entry points return this type so a caller matches one enum
/// regardless of which phase failed. Every variant aborts the render fully;
/// no partial output is ever produced.
pub enum TemplateError {
    /// The template source could not be tokenized.
    Lex(LexError),
    /// The token stream violated the template grammar.
    Parse(ParseError),
    /// Evaluation or template loading failed.
    Render(RenderError),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Render(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Render(e) => Some(e),
        }
    }
}

impl From<LexError> for TemplateError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for TemplateError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RenderError> for TemplateError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}
