use std::rc::Rc;

use crate::{interpreter::value::arguments::Arguments, locale::Locale};

/// Represents a runtime value in the argument scope.
///
/// This is a closed sum type: the evaluator's type checks are exhaustive
/// matches, and a value of the wrong kind for its context is a single
/// well-defined error path rather than a scattered cast. All variants are
/// cheap to clone; the closure-carrying ones share their payload through
/// [`Rc`].
#[derive(Clone)]
pub enum Value {
    /// Plain text. Passed through the configuration's treatment hook when
    /// emitted.
    Text(String),
    /// A value formatted per locale at emission time, never treated.
    LocaleSensitive(LocaleSensitive),
    /// A value exposing fields only through its mapper, which populates a
    /// fresh scope on demand.
    Mapped(Mapped),
    /// An ordered collection of mappable items. Only iterable, never
    /// directly renderable.
    Collection(Collection),
    /// A boolean tested by `if` blocks. Only testable, never directly
    /// renderable.
    Condition(bool),
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::LocaleSensitive(_) => f.write_str("LocaleSensitive(..)"),
            Self::Mapped(mapped) => f.debug_tuple("Mapped").field(&mapped.text()).finish(),
            Self::Collection(collection) => {
                f.debug_tuple("Collection").field(&collection.len()).finish()
            },
            Self::Condition(value) => f.debug_tuple("Condition").field(value).finish(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Condition(value)
    }
}

impl From<LocaleSensitive> for Value {
    fn from(value: LocaleSensitive) -> Self {
        Self::LocaleSensitive(value)
    }
}

impl From<Mapped> for Value {
    fn from(value: Mapped) -> Self {
        Self::Mapped(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Self::Collection(value)
    }
}

/// A value resolved into text against the render locale.
///
/// The resolver captures the underlying object at registration time, so the
/// engine never inspects the object itself. The resolver output is emitted
/// as-is: it is considered already formatted and bypasses the treatment
/// hook.
#[derive(Clone)]
pub struct LocaleSensitive {
    resolver: Rc<dyn Fn(&Locale) -> String>,
}

impl LocaleSensitive {
    /// Captures `object` together with its locale resolver.
    pub fn new<T, F>(object: T, resolver: F) -> Self
        where T: 'static,
              F: Fn(&T, &Locale) -> String + 'static
    {
        Self { resolver: Rc::new(move |locale| resolver(&object, locale)) }
    }

    /// Formats the underlying object for `locale`.
    #[must_use]
    pub fn resolve(&self, locale: &Locale) -> String {
        (self.resolver)(locale)
    }
}

/// A value whose fields are reachable only through its mapper.
///
/// Materialization runs the mapper against a fresh, empty scope; each
/// materialized scope serves exactly one lookup and is then discarded. A
/// mapped value may also carry a direct textual form, set when it was built
/// from a text collection item, which is what a bare loop variable emits.
#[derive(Clone)]
pub struct Mapped {
    text:     Option<Rc<str>>,
    populate: Rc<dyn Fn(&mut Arguments)>,
}

impl Mapped {
    /// Captures `object` together with the mapper that exposes its fields.
    pub fn new<T, F>(object: T, mapper: F) -> Self
        where T: 'static,
              F: Fn(&T, &mut Arguments) + 'static
    {
        Self { text:     None,
               populate: Rc::new(move |arguments| mapper(&object, arguments)), }
    }

    /// Runs the mapper against a fresh scope and returns it.
    #[must_use]
    pub fn materialize(&self) -> Arguments {
        let mut arguments = Arguments::new();
        (self.populate)(&mut arguments);
        arguments
    }

    /// The direct textual form, present only for text collection items.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// An ordered collection whose items all share one mapper.
///
/// Iterating binds each item to the loop variable as a [`Mapped`] value, so
/// the body resolves item fields through the collection's mapper. An empty
/// collection makes a `for` block take its else branch instead.
#[derive(Clone)]
pub struct Collection {
    items: Rc<Vec<Mapped>>,
}

impl Collection {
    /// Builds a collection from `items` and the mapper shared by all of
    /// them.
    pub fn new<T, I, F>(items: I, mapper: F) -> Self
        where T: 'static,
              I: IntoIterator<Item = T>,
              F: Fn(&T, &mut Arguments) + 'static
    {
        let mapper = Rc::new(mapper);
        let items = items.into_iter()
                         .map(|item| {
                             let mapper = Rc::clone(&mapper);
                             Mapped { text:     None,
                                      populate: Rc::new(move |arguments| mapper(&item, arguments)), }
                         })
                         .collect();

        Self { items: Rc::new(items) }
    }

    /// Builds a collection of plain text items with a no-op mapper.
    ///
    /// Each item keeps its text as the direct form, so a bare loop variable
    /// emits it; nested access on such an item resolves nothing.
    pub fn from_texts<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let items = items.into_iter()
                         .map(|item| {
                             let text: String = item.into();
                             Mapped { text:     Some(Rc::from(text)),
                                      populate: Rc::new(|_: &mut Arguments| {}), }
                         })
                         .collect();

        Self { items: Rc::new(items) }
    }

    /// Returns `true` when the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Mapped> {
        self.items.iter()
    }
}
