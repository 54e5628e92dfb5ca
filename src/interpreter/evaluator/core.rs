use crate::{
    ast::AbstractSyntax,
    config::Configuration,
    error::RenderError,
    interpreter::value::{arguments::Arguments, core::Value},
    locale::Locale,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RenderError` describing the failure. Any failure aborts the render
/// fully; output accumulates in memory and only reaches the caller on
/// success.
pub type RenderResult<T> = Result<T, RenderError>;

/// Stores the state of one render: the root argument scope, the loop
/// frames, the render locale and the configuration.
///
/// The root scope is read-only for the whole render. Loop bindings are
/// pushed as frames per iteration and popped when the iteration finishes,
/// so the pre-loop scope shape is restored by construction and concurrent
/// renders over independently built contexts cannot observe each other's
/// bindings.
pub struct Context<'a> {
    pub(crate) root:          &'a Arguments,
    pub(crate) frames:        Vec<(String, Value)>,
    pub(crate) locale:        &'a Locale,
    pub(crate) configuration: &'a Configuration,
}

impl<'a> Context<'a> {
    /// Creates a context for one render.
    #[must_use]
    pub fn new(root: &'a Arguments, locale: &'a Locale, configuration: &'a Configuration) -> Self {
        Self { root,
               frames: Vec::new(),
               locale,
               configuration }
    }

    /// Evaluates a syntax tree node into its rendered text.
    ///
    /// This is the main entry point for evaluation, with one rule per node
    /// kind: literals emit themselves, id references substitute their
    /// resolved text, `if` blocks pick a branch by condition, `for` blocks
    /// concatenate one body evaluation per item, and statement sequences
    /// concatenate their children in order.
    ///
    /// # Parameters
    /// - `syntax`: The node to evaluate.
    ///
    /// # Returns
    /// The rendered text of the node.
    ///
    /// # Errors
    /// Returns a `RenderError` if an id cannot be resolved, a value of the
    /// wrong kind reaches a condition, iteration or emission context.
    pub fn evaluate(&mut self, syntax: &AbstractSyntax) -> RenderResult<String> {
        match syntax {
            AbstractSyntax::Text(literal) => Ok(literal.clone()),
            AbstractSyntax::Id(id) => self.evaluate_id(id),
            AbstractSyntax::If { condition,
                                 then_branch,
                                 else_branch, } => match self.resolve_id(condition)? {
                Value::Condition(true) => self.evaluate(then_branch),
                Value::Condition(false) => self.evaluate(else_branch),
                _ => Err(RenderError::NotCondition { path: condition.to_string() }),
            },
            AbstractSyntax::For { variable,
                                  collection,
                                  body,
                                  else_branch, } => {
                self.evaluate_for(variable, collection, body, else_branch)
            },
            AbstractSyntax::Statements(statements) => {
                let mut output = String::new();
                for statement in statements {
                    output.push_str(&self.evaluate(statement)?);
                }
                Ok(output)
            },
            AbstractSyntax::Empty => Ok(String::new()),
        }
    }

    /// Looks a key up in the loop frames (innermost first), then in the
    /// root scope.
    pub(crate) fn lookup(&self, key: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
            .or_else(|| self.root.get(key))
    }
}
