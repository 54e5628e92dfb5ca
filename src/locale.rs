/// A locale tag such as `en-US` or `pt-BR`.
///
/// The engine treats the tag as opaque: it keys the parse cache, names the
/// per-locale directory a [`FileLoader`] reads from, and is handed to
/// locale-sensitive resolvers during evaluation. No tag validation is
/// performed.
///
/// ## Example
/// ```
/// use brook::Locale;
///
/// let locale = Locale::new("pt-BR");
///
/// assert_eq!(locale.tag(), "pt-BR");
/// assert_eq!(Locale::default().tag(), "en-US");
/// ```
///
/// [`FileLoader`]: crate::interpreter::loader::FileLoader
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Creates a locale from its tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The tag this locale was created with.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}
