/// The argument scope.
///
/// Defines `Arguments`, the name → value map a template renders against,
/// with one registration method per value kind.
pub mod arguments;

/// Runtime value kinds.
///
/// Defines the `Value` sum type — plain text, locale-sensitive values,
/// mapped objects, collections and conditions — and their construction
/// helpers.
pub mod core;
