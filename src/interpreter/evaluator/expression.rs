use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, ProgramState},
        value::Value,
    },
};

impl ProgramState {
    /// Evaluates an expression against the current state.
    ///
    /// Evaluation only reads the state. The evaluator dispatches on the
    /// expression variant:
    /// - literals evaluate to themselves,
    /// - variables evaluate to their current integer value,
    /// - `not a b` evaluates both operands and yields whether they differ.
    ///   Operands of different kinds always differ.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if a referenced variable was
    /// never created.
    ///
    /// # Example
    /// ```
    /// use whilelang::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::ProgramState, value::Value},
    /// };
    ///
    /// let mut state = ProgramState::new();
    /// state.set("x", 2);
    ///
    /// let test = Expr::inequality(Expr::variable("x"), Expr::integer(2));
    /// assert_eq!(state.eval(&test).unwrap(), Value::Boolean(false));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Inequality { lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Ok(Value::Boolean(lhs.differs_from(&rhs)))
            },
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}
