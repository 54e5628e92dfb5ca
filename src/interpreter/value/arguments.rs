use std::collections::HashMap;

use crate::{
    interpreter::value::core::{Collection, LocaleSensitive, Mapped, Value},
    locale::Locale,
};

/// The argument scope a template is evaluated against: a name → value map
/// with unique keys.
///
/// One root scope belongs to one render. Nested scopes are materialized
/// fresh by mapped values during dotted-id resolution and discarded after
/// the lookup they served; loop-variable bindings live in the evaluator's
/// own frames, so the root scope is never mutated by a render.
///
/// ## Example
/// ```
/// use brook::Arguments;
///
/// struct User {
///     name: String,
/// }
///
/// let user = User { name: "Ana".to_string() };
///
/// let mut arguments = Arguments::new();
/// arguments.add("greeting", "Hello");
/// arguments.add("logged_in", true);
/// arguments.add_mapped_object("user", user, |user, scope| {
///     scope.add("name", user.name.clone());
/// });
///
/// assert!(arguments.get("user").is_some());
/// assert!(arguments.get("missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Arguments {
    map: HashMap<String, Value>,
}

impl Arguments {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain value: text (treated on emission) or a boolean
    /// condition. An existing value under the same key is replaced.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(key.into(), value.into());
    }

    /// Adds a value formatted per locale at emission time.
    ///
    /// The resolver receives the captured object and the render locale and
    /// returns the finished text; the treatment hook does not run on it.
    pub fn add_locale_sensitive<T, F>(&mut self, key: impl Into<String>, object: T, resolver: F)
        where T: 'static,
              F: Fn(&T, &Locale) -> String + 'static
    {
        self.map.insert(key.into(), Value::LocaleSensitive(LocaleSensitive::new(object, resolver)));
    }

    /// Adds a mapped object whose fields are exposed by `mapper`.
    ///
    /// The mapper is invoked once per materialization, against a fresh
    /// scope, whenever a dotted id steps through this key.
    pub fn add_mapped_object<T, F>(&mut self, key: impl Into<String>, object: T, mapper: F)
        where T: 'static,
              F: Fn(&T, &mut Arguments) + 'static
    {
        self.map.insert(key.into(), Value::Mapped(Mapped::new(object, mapper)));
    }

    /// Adds a collection of items sharing one mapper, iterable with a `for`
    /// block.
    pub fn add_collection<T, I, F>(&mut self, key: impl Into<String>, items: I, mapper: F)
        where T: 'static,
              I: IntoIterator<Item = T>,
              F: Fn(&T, &mut Arguments) + 'static
    {
        self.map.insert(key.into(), Value::Collection(Collection::new(items, mapper)));
    }

    /// Adds a collection of plain text items with a no-op mapper; the bare
    /// loop variable emits each item's text.
    pub fn add_text_collection<I, S>(&mut self, key: impl Into<String>, items: I)
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.map.insert(key.into(), Value::Collection(Collection::from_texts(items)));
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Returns `true` when the scope holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The number of values in the scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}
