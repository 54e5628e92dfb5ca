//! # brook
//!
//! brook is a locale-aware text templating engine written in Rust.
//! It compiles template source — literal markup interleaved with control
//! directives — into a reusable syntax tree, caches the tree per (template,
//! locale) pair, and evaluates it against a typed argument scope to produce
//! rendered text.
//!
//! Template syntax:
//!
//! ```text
//! Hello {{ name }}!
//! {{ if logged_in }}Welcome back{{ else }}Please sign in{{ end }}
//! {{ for item in items }}[{{ item }}]{{ else }}nothing here{{ end }}
//! {{ user.address.city }}
//! ```
//!
//! Text outside `{{ }}` passes through verbatim. Plain text arguments run
//! through a configurable treatment hook (escaping, typically) before
//! emission; locale-sensitive arguments are formatted against the render
//! locale by their own resolvers. Dotted identifiers step through mapped
//! objects, whose user-supplied mappers populate a fresh nested scope on
//! demand — no reflection involved.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed templates.
///
/// This module declares the syntax tree node types the parser builds and
/// the evaluator traverses, plus the dotted identifier chain.
///
/// # Responsibilities
/// - Defines node types for every template construct.
/// - Keeps the tree immutable after construction so it can be cached and
///   shared.
pub mod ast;
/// Render-time configuration.
///
/// Declares the configuration value carrying the default locale and the
/// plain text treatment hook.
///
/// # Responsibilities
/// - Supplies the default locale for render calls that name none.
/// - Applies the treatment hook to plain text values before emission.
pub mod config;
/// Provides unified error types for lexing, parsing and rendering.
///
/// This module defines all errors that can be raised while compiling or
/// evaluating a template, and the umbrella type engine entry points return.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   loader).
/// - Attaches source lines to compilation errors and dotted paths to
///   resolution errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of template rendering.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, caching and loading to provide a complete rendering
/// runtime.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Provides the engine entry points for rendering templates.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Locale tags.
///
/// Declares the locale value used for cache keys, per-locale source lookup
/// and locale-sensitive formatting.
///
/// # Responsibilities
/// - Wraps the tag string with equality and hashing for cache keys.
/// - Carries the default `en-US` tag.
pub mod locale;
/// Page composition.
///
/// Declares the template trait for composing pages as objects: a file path
/// plus argument population, sub-template bindings and an optional master
/// page.
///
/// # Responsibilities
/// - Defines the `Template` trait and its composition hooks.
/// - Defines the sub-template binding set.
pub mod template;

pub use crate::{
    config::Configuration,
    error::TemplateError,
    interpreter::{
        engine::Engine,
        loader::{FileLoader, Loader},
        value::{arguments::Arguments, core::Value},
    },
    locale::Locale,
    template::{SubTemplates, Template},
};

/// Renders template source directly against an argument scope, without a
/// loader or cache.
///
/// The source is lexed, parsed and evaluated in one pass. Use an
/// [`Engine`] instead when the same template renders more than once.
///
/// # Parameters
/// - `source`: Raw template text.
/// - `arguments`: The root argument scope for this render.
/// - `locale`: The locale handed to locale-sensitive resolvers.
/// - `configuration`: Treatment hook and defaults for this render.
///
/// # Returns
/// The rendered text.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. Nothing is
/// returned on failure; no partial output escapes.
///
/// # Examples
/// ```
/// use brook::{Arguments, Configuration, Locale};
///
/// let mut arguments = Arguments::new();
/// arguments.add("name", "World");
///
/// let rendered = brook::render_str("Hello {{ name }}!",
///                                  &arguments,
///                                  &Locale::default(),
///                                  &Configuration::default()).unwrap();
///
/// assert_eq!(rendered, "Hello World!");
/// ```
pub fn render_str(source: &str,
                  arguments: &Arguments,
                  locale: &Locale,
                  configuration: &Configuration)
                  -> Result<String, TemplateError> {
    let tokens = interpreter::lexer::lex(source)?;
    let syntax = interpreter::parser::core::parse(&tokens)?;
    let mut context = interpreter::evaluator::core::Context::new(arguments, locale, configuration);

    Ok(context.evaluate(&syntax)?)
}
