use crate::interpreter::value::arguments::Arguments;

/// A page composed as an object: a template file plus the arguments,
/// sub-templates and optional master page it renders with.
///
/// Implementors declare where their source lives ([`file_path`]) and
/// override the remaining hooks as needed. Rendering goes through
/// [`Engine::render`]: sub-templates render first (each without its own
/// master) and bind as plain text under their keys; the page body then
/// walks the master chain, binding each stage's output under the `content`
/// key of the next master's arguments.
///
/// ## Example
/// ```no_run
/// use brook::{Arguments, Engine, FileLoader, Template};
///
/// struct Greeting;
///
/// impl Template for Greeting {
///     fn file_path(&self) -> &str {
///         "greeting.html"
///     }
///
///     fn populate(&self, arguments: &mut Arguments) {
///         arguments.add("name", "World");
///     }
/// }
///
/// let engine = Engine::new(FileLoader::new("templates"));
/// let rendered = engine.render(&Greeting).unwrap();
/// ```
///
/// [`file_path`]: Template::file_path
/// [`Engine::render`]: crate::interpreter::engine::Engine::render
pub trait Template {
    /// The logical template path, resolved by the engine's loader.
    fn file_path(&self) -> &str;

    /// Adds this template's arguments to the scope it renders with.
    fn populate(&self, _arguments: &mut Arguments) {}

    /// The master page wrapping this template, if any. The rendered body
    /// binds under `content` in the master's arguments.
    fn master_template(&self) -> Option<&dyn Template> {
        None
    }

    /// Registers sub-templates, each rendered and bound as plain text under
    /// its key before this template renders.
    fn add_sub_templates<'a>(&'a self, _sub_templates: &mut SubTemplates<'a>) {}
}

/// The sub-template bindings of one template: binding key → template.
#[derive(Default)]
pub struct SubTemplates<'a> {
    entries: Vec<(String, &'a dyn Template)>,
}

impl<'a> SubTemplates<'a> {
    /// Creates an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Binds `template` under `key`.
    pub fn add(&mut self, key: impl Into<String>, template: &'a dyn Template) {
        self.entries.push((key.into(), template));
    }

    /// Iterates the bindings in registration order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &(String, &'a dyn Template)> {
        self.entries.iter()
    }
}
