use crate::{
    ast::Id,
    error::RenderError,
    interpreter::{
        evaluator::core::{Context, RenderResult},
        value::{arguments::Arguments, core::Value},
    },
};

impl Context<'_> {
    /// Evaluates an id reference into the text it substitutes.
    ///
    /// Emission rules per resolved kind:
    /// - plain text passes through the configuration's treatment hook,
    /// - a locale-sensitive value is resolved against the render locale and
    ///   emitted as-is,
    /// - a mapped value emits its direct text when it has one (a text
    ///   collection item bound to a loop variable),
    /// - collections, conditions and field-only mapped values cannot be
    ///   emitted and fail with `InvalidEvaluation`.
    pub(crate) fn evaluate_id(&self, id: &Id) -> RenderResult<String> {
        match self.resolve_id(id)? {
            Value::Text(text) => Ok(self.configuration.apply_treatment(&text)),
            Value::LocaleSensitive(sensitive) => Ok(sensitive.resolve(self.locale)),
            Value::Mapped(mapped) => match mapped.text() {
                Some(text) => Ok(text.to_owned()),
                None => Err(RenderError::InvalidEvaluation { details: format!("Mapped object '{id}' cannot be emitted as text. When iterating, make sure the collection holds text items.") }),
            },
            Value::Collection(_) => {
                Err(RenderError::InvalidEvaluation { details:
                                                         format!("Collection '{id}' cannot be emitted as text.") })
            },
            Value::Condition(_) => {
                Err(RenderError::InvalidEvaluation { details:
                                                         format!("Condition '{id}' cannot be emitted as text.") })
            },
        }
    }

    /// Resolves a dotted id against the current scope.
    ///
    /// The first segment is looked up in the loop frames and the root
    /// scope; every further segment must step through a mapped value, whose
    /// mapper materializes the nested scope the next segment resolves in.
    /// Nested scopes do not fall back to outer ones.
    ///
    /// # Errors
    /// Returns `IdNotFound` when a segment is absent or nested access hits
    /// a value without a nested scope. The reported path is always the
    /// outermost id's full dotted path, even when an inner segment failed.
    pub(crate) fn resolve_id(&self, id: &Id) -> RenderResult<Value> {
        let value = self.lookup(&id.key)
                        .cloned()
                        .ok_or_else(|| RenderError::IdNotFound { path: id.to_string() })?;

        resolve_nested(value, id)
    }
}

/// Steps into `value` when `id` carries a nested remainder.
fn resolve_nested(value: Value, id: &Id) -> RenderResult<Value> {
    let Some(nested) = id.nested.as_deref() else {
        return Ok(value);
    };

    let Value::Mapped(mapped) = value else {
        return Err(RenderError::IdNotFound { path: id.to_string() });
    };

    let scope = mapped.materialize();

    // Failures below this id are re-reported under this id's full path.
    resolve_in(&scope, nested).map_err(|_| RenderError::IdNotFound { path: id.to_string() })
}

/// Resolves an id against one materialized scope, with no outer fallback.
fn resolve_in(scope: &Arguments, id: &Id) -> RenderResult<Value> {
    let value = scope.get(&id.key)
                     .cloned()
                     .ok_or_else(|| RenderError::IdNotFound { path: id.to_string() })?;

    resolve_nested(value, id)
}
