/// Core evaluation logic and render context.
///
/// Contains the per-render context (scope, frames, locale, configuration)
/// and the node dispatch.
pub mod core;

/// Evaluation of `for` blocks.
///
/// Resolves the collection, manages the per-iteration loop-variable frame,
/// and concatenates body outputs.
pub mod for_loop;

/// Identifier resolution and emission.
///
/// Resolves dotted ids through materialized nested scopes and turns
/// resolved values into emitted text.
pub mod id;
