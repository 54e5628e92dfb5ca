/// A dotted identifier path such as `user.address.city`, stored as a
/// right-leaning chain: the first segment plus an optional nested id holding
/// the rest.
///
/// Ids appear in three places: as bare substitutions, as the condition of an
/// `if` block, and as the collection of a `for` block. The [`Display`]
/// implementation prints the full dotted path, which is what resolution
/// errors report.
///
/// ## Example
/// ```
/// use brook::ast::Id;
///
/// let id = Id::with_nested("user", Id::new("name"));
///
/// assert_eq!(id.to_string(), "user.name");
/// ```
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    /// The first segment of the path.
    pub key:    String,
    /// The remaining segments, as a nested id.
    pub nested: Option<Box<Id>>,
}

impl Id {
    /// Creates a single-segment id.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key:    key.into(),
               nested: None, }
    }

    /// Creates an id with a nested remainder, one accessor deep.
    #[must_use]
    pub fn with_nested(key: impl Into<String>, nested: Self) -> Self {
        Self { key:    key.into(),
               nested: Some(Box::new(nested)), }
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)?;
        if let Some(nested) = &self.nested {
            write!(f, ".{nested}")?;
        }
        Ok(())
    }
}

/// A node of the parsed template, as a tagged union.
///
/// The tree is finite, acyclic and never mutated after parsing; the same
/// tree is evaluated repeatedly against different argument scopes and
/// locales, which is what makes the parse cache sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbstractSyntax {
    /// A literal run of template text, emitted verbatim.
    Text(String),
    /// An identifier reference, substituted with its resolved text.
    Id(Id),
    /// An `if` block. The else branch is [`Empty`] when the template has no
    /// `else` section.
    ///
    /// [`Empty`]: AbstractSyntax::Empty
    If {
        /// The id tested to pick a branch.
        condition:   Id,
        /// Evaluated when the condition is true.
        then_branch: Box<Self>,
        /// Evaluated when the condition is false.
        else_branch: Box<Self>,
    },
    /// A `for` block iterating a collection.
    For {
        /// The loop variable name bound once per item.
        variable:    String,
        /// The id of the collection being iterated.
        collection:  Id,
        /// Evaluated once per item, in collection order.
        body:        Box<Self>,
        /// Evaluated instead of the body when the collection is empty.
        else_branch: Box<Self>,
    },
    /// An ordered sequence of nodes, concatenated in order.
    Statements(Vec<Self>),
    /// Renders the empty string.
    Empty,
}
