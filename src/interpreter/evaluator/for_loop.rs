use crate::{
    ast::{AbstractSyntax, Id},
    error::RenderError,
    interpreter::{
        evaluator::core::{Context, RenderResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a `for` block.
    ///
    /// The collection id must resolve to a collection value. An empty
    /// collection evaluates the else branch instead of iterating. Otherwise
    /// each item, in order, is bound to the loop variable as a mapped value
    /// built from the item and the collection's mapper, the body is
    /// evaluated, and the outputs are concatenated.
    ///
    /// The binding is a frame pushed for one iteration and popped after it,
    /// so it shadows any same-named outer binding inside the body and the
    /// scope returns to its pre-loop shape when the loop finishes.
    ///
    /// # Parameters
    /// - `variable`: The loop variable name.
    /// - `collection_id`: The id naming the collection.
    /// - `body`: Evaluated once per item.
    /// - `else_branch`: Evaluated instead when the collection is empty.
    ///
    /// # Returns
    /// The concatenated body outputs, or the else branch output.
    ///
    /// # Errors
    /// - `NotCollection` if the id resolves to any other value kind.
    /// - Any error the body or else branch raises.
    pub(crate) fn evaluate_for(&mut self,
                               variable: &str,
                               collection_id: &Id,
                               body: &AbstractSyntax,
                               else_branch: &AbstractSyntax)
                               -> RenderResult<String> {
        let value = self.resolve_id(collection_id)?;

        let Value::Collection(collection) = value else {
            return Err(RenderError::NotCollection { path: collection_id.to_string() });
        };

        if collection.is_empty() {
            return self.evaluate(else_branch);
        }

        let mut output = String::new();

        for item in collection.iter() {
            self.frames.push((variable.to_owned(), Value::Mapped(item.clone())));
            let rendered = self.evaluate(body);
            self.frames.pop();
            output.push_str(&rendered?);
        }

        Ok(output)
    }
}
