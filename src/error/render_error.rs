#[derive(Debug)]
/// Represents all errors that can occur during evaluation and template
/// loading.
pub enum RenderError {
    /// An identifier could not be resolved against the argument scope.
    ///
    /// This covers both an absent key and nested access on a value that has
    /// no nested scope; nested failures always report the outermost dotted
    /// path.
    IdNotFound {
        /// The full dotted path of the outermost identifier.
        path: String,
    },
    /// A `for` block named an id whose value is not a collection.
    NotCollection {
        /// The full dotted path of the id.
        path: String,
    },
    /// An `if` block named an id whose value is not a condition.
    NotCondition {
        /// The full dotted path of the id.
        path: String,
    },
    /// A value of a non-renderable kind reached a text-emission context.
    InvalidEvaluation {
        /// Details about which value was emitted where.
        details: String,
    },
    /// The loader found no template source in any attempted locale.
    TemplateNotFound {
        /// The logical template path that could not be loaded.
        path: String,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdNotFound { path } => write!(f, "Id '{path}' could not be resolved."),
            Self::NotCollection { path } => {
                write!(f,
                       "'{path}' is not a collection. Only values added as collections can be iterated.")
            },
            Self::NotCondition { path } => {
                write!(f, "'{path}' is not a condition. Only boolean values can be tested.")
            },
            Self::InvalidEvaluation { details } => write!(f, "{details}"),
            Self::TemplateNotFound { path } => {
                write!(f, "No template source found for '{path}' in any attempted locale.")
            },
        }
    }
}

impl std::error::Error for RenderError {}
