use std::sync::Arc;

use crate::{
    ast::AbstractSyntax,
    config::Configuration,
    error::{RenderError, TemplateError},
    interpreter::{
        cache::ParseCache,
        evaluator::core::Context,
        lexer,
        loader::Loader,
        parser,
        value::arguments::Arguments,
    },
    locale::Locale,
    template::{SubTemplates, Template},
};

/// The render service: a loader, a configuration and the parse cache.
///
/// An engine is constructed once and shared by every render. Each distinct
/// (template path, locale) pair is loaded, lexed and parsed a single time;
/// later renders of the same pair reuse the cached tree with their own
/// argument scopes. Changed template source takes effect only in a new
/// engine.
///
/// ## Example
/// ```no_run
/// use brook::{Arguments, Engine, FileLoader, Locale};
///
/// let engine = Engine::new(FileLoader::new("templates"));
///
/// let mut arguments = Arguments::new();
/// arguments.add("name", "World");
///
/// let rendered = engine.render_path("greeting.html", &Locale::new("en-US"), &arguments);
/// ```
pub struct Engine {
    loader:        Box<dyn Loader + Send + Sync>,
    configuration: Configuration,
    cache:         ParseCache,
}

impl Engine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(loader: impl Loader + Send + Sync + 'static) -> Self {
        Self::with_configuration(loader, Configuration::default())
    }

    /// Creates an engine with an explicit configuration.
    #[must_use]
    pub fn with_configuration(loader: impl Loader + Send + Sync + 'static,
                              configuration: Configuration)
                              -> Self {
        Self { loader: Box::new(loader),
               configuration,
               cache: ParseCache::new() }
    }

    /// The configuration every render of this engine uses.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Renders a composed template in the configured default locale.
    ///
    /// # Errors
    /// Returns a `TemplateError` if any involved template fails to load,
    /// lex, parse or evaluate.
    pub fn render(&self, template: &dyn Template) -> Result<String, TemplateError> {
        self.render_in(template, self.configuration.default_locale())
    }

    /// Renders a composed template in `locale`.
    ///
    /// Sub-templates render first, each without its own master, and bind as
    /// plain text under their keys. The page body then walks the master
    /// chain: each stage's output binds under `content` in the next
    /// master's arguments.
    ///
    /// # Errors
    /// Returns a `TemplateError` if any involved template fails to load,
    /// lex, parse or evaluate.
    pub fn render_in(&self, template: &dyn Template, locale: &Locale) -> Result<String, TemplateError> {
        let mut rendered = self.render_component(template, locale)?;
        let mut master = template.master_template();

        while let Some(current) = master {
            let mut arguments = self.component_arguments(current, locale)?;
            arguments.add("content", rendered);
            rendered = self.render_path(current.file_path(), locale, &arguments)?;
            master = current.master_template();
        }

        Ok(rendered)
    }

    /// Renders one template file against an argument scope.
    ///
    /// The compiled tree comes from the parse cache; on a miss the source
    /// is loaded (with locale fallback), lexed and parsed, then stored
    /// under the exact requested key.
    ///
    /// # Parameters
    /// - `template_path`: Logical template path, resolved by the loader.
    /// - `locale`: The locale to render in.
    /// - `arguments`: The root argument scope for this render.
    ///
    /// # Errors
    /// Returns a `TemplateError` if loading, lexing, parsing or evaluation
    /// fails.
    pub fn render_path(&self,
                       template_path: &str,
                       locale: &Locale,
                       arguments: &Arguments)
                       -> Result<String, TemplateError> {
        let syntax = self.syntax_tree(template_path, locale)?;
        let mut context = Context::new(arguments, locale, &self.configuration);

        Ok(context.evaluate(&syntax)?)
    }

    /// Renders one template without its master: populated arguments plus
    /// rendered sub-templates.
    fn render_component(&self,
                        template: &dyn Template,
                        locale: &Locale)
                        -> Result<String, TemplateError> {
        let arguments = self.component_arguments(template, locale)?;
        self.render_path(template.file_path(), locale, &arguments)
    }

    /// Builds a template's argument scope: its own arguments plus one plain
    /// text binding per rendered sub-template.
    fn component_arguments(&self,
                           template: &dyn Template,
                           locale: &Locale)
                           -> Result<Arguments, TemplateError> {
        let mut arguments = Arguments::new();
        template.populate(&mut arguments);

        let mut sub_templates = SubTemplates::new();
        template.add_sub_templates(&mut sub_templates);

        for (key, sub_template) in sub_templates.entries() {
            let rendered = self.render_component(*sub_template, locale)?;
            arguments.add(key.as_str(), rendered);
        }

        Ok(arguments)
    }

    /// Fetches the compiled tree for the pair, parsing on a cache miss.
    fn syntax_tree(&self,
                   template_path: &str,
                   locale: &Locale)
                   -> Result<Arc<AbstractSyntax>, TemplateError> {
        if let Some(cached) = self.cache.get(template_path, locale) {
            return Ok(cached);
        }

        let source = self.load_with_fallback(template_path, locale)?;
        let tokens = lexer::lex(&source)?;
        let syntax = parser::core::parse(&tokens)?;

        Ok(self.cache.store(template_path, locale, syntax))
    }

    /// Loads template source for the exact locale, then for the configured
    /// default locale.
    fn load_with_fallback(&self,
                          template_path: &str,
                          locale: &Locale)
                          -> Result<String, TemplateError> {
        if let Some(source) = self.loader.load_source(template_path, locale) {
            return Ok(source);
        }

        let default_locale = self.configuration.default_locale();
        if locale != default_locale
           && let Some(source) = self.loader.load_source(template_path, default_locale)
        {
            return Ok(source);
        }

        Err(RenderError::TemplateNotFound { path: template_path.to_owned() }.into())
    }
}
