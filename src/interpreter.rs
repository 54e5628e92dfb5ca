/// The parse cache.
///
/// Memoizes compiled syntax trees per (template path, locale) pair so each
/// distinct pair is loaded, lexed and parsed once per engine lifetime.
///
/// # Responsibilities
/// - Stores immutable trees shared across renders.
/// - Keys on the exact requested pair; never evicts or invalidates.
/// - Tolerates racing renders by keeping the first stored tree.
pub mod cache;
/// The render service tying the pipeline together.
///
/// The engine owns the loader, the configuration and the parse cache, and
/// exposes the render entry points for template files and composed pages.
///
/// # Responsibilities
/// - Coordinates loading (with locale fallback), lexing, parsing and
///   evaluation.
/// - Renders composed templates: sub-template bindings and master chains.
/// - Funnels every failure into one error type per render.
pub mod engine;
/// The evaluator module executes syntax tree nodes and produces text.
///
/// The evaluator traverses the tree with one rule per node kind, resolves
/// identifiers against the argument scope, and concatenates the rendered
/// pieces in order.
///
/// # Responsibilities
/// - Evaluates nodes against a scope, a locale and a configuration.
/// - Manages loop-variable frames and nested scope materialization.
/// - Reports unresolvable ids and values of the wrong kind for their
///   context.
pub mod evaluator;
/// The lexer module tokenizes template source for further parsing.
///
/// The lexer reads raw template text and produces a stream of tokens:
/// literal runs, directive keywords, identifier segments and accessors.
/// This is the first stage of compilation.
///
/// # Responsibilities
/// - Splits source into literal text and directive tokens with source
///   lines.
/// - Merges adjacent literal runs and appends the end-of-input sentinel.
/// - Reports unclosed directives and invalid directive characters.
pub mod lexer;
/// The loader boundary between the engine and template storage.
///
/// A loader turns a logical template path and a locale into source text;
/// the file loader reads a per-locale directory tree.
///
/// # Responsibilities
/// - Defines the `Loader` trait the engine loads through.
/// - Provides the file-system implementation.
pub mod loader;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs the tree that evaluation walks. The grammar is LL(1) and
/// parsed in a single pass with no backtracking.
///
/// # Responsibilities
/// - Converts tokens into structured tree nodes.
/// - Validates the grammar, reporting the expected terminal, the actual
///   token and its position on mismatch.
/// - Reassembles dotted identifiers from key and accessor tokens.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of value kinds an argument scope can
/// hold — plain text, locale-sensitive values, mapped objects, collections
/// and conditions — and the scope itself with its registration API.
///
/// # Responsibilities
/// - Defines the `Value` sum type and its construction helpers.
/// - Defines `Arguments`, the name → value scope templates render against.
/// - Keeps every value cheap to clone for scope snapshots.
pub mod value;
