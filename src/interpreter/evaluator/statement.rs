use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, ProgramState},
        value::Value,
    },
};

impl ProgramState {
    /// Executes every statement of `program` in order.
    ///
    /// There is no early exit; the first fatal error aborts the remaining
    /// statements and is returned.
    ///
    /// # Errors
    /// Propagates the first fatal `RuntimeError` raised by a statement.
    pub fn exec_program(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - `clear v` sets `v` to zero, creating it if absent.
    /// - `incr v` / `decr v` adjust `v` by one if it exists and do nothing
    ///   otherwise. Values may go negative.
    /// - `while` loops run until their test is false.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if a loop test reads an
    /// undefined variable.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        tracing::trace!(%statement, "executing");

        match statement {
            Statement::Clear(name) => self.set(name, 0),
            Statement::Incr(name) => {
                self.adjust(name, 1);
            },
            Statement::Decr(name) => {
                self.adjust(name, -1);
            },
            Statement::While { test, body } => self.exec_while(test, body)?,
        }
        Ok(())
    }

    /// Runs a `while` loop.
    ///
    /// The test is evaluated before every iteration. A non-boolean test is
    /// reported as a diagnostic and the loop is treated as never entered; the
    /// run then carries on with the next statement. Iteration is unbounded.
    ///
    /// # Example
    /// ```
    /// use whilelang::{
    ///     ast::{Expr, Program, Statement},
    ///     interpreter::evaluator::core::ProgramState,
    /// };
    ///
    /// let mut state = ProgramState::new();
    /// state.set("x", 0);
    ///
    /// let test = Expr::inequality(Expr::variable("x"), Expr::integer(3));
    /// let body = Program::new(vec![Statement::Incr("x".into())]);
    /// state.exec_while(&test, &body).unwrap();
    ///
    /// assert_eq!(state.get("x"), Some(3));
    /// ```
    ///
    /// # Errors
    /// Returns any fatal error raised by the test or the body.
    pub fn exec_while(&mut self, test: &Expr, body: &Program) -> EvalResult<()> {
        let mut iterations: u64 = 0;

        loop {
            match self.eval(test)? {
                Value::Boolean(true) => {
                    iterations += 1;
                    tracing::trace!(iterations, "loop iteration");
                    self.exec_program(body)?;
                },
                Value::Boolean(false) => break,
                other @ Value::Integer(_) => {
                    self.report(RuntimeError::ExpectedBoolean { found: format!("{} {other}",
                                                                               other.kind()) });
                    break;
                },
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(statements: Vec<Statement>) -> EvalResult<ProgramState> {
        let mut state = ProgramState::new();
        state.exec_program(&Program::new(statements))?;
        Ok(state)
    }

    #[test]
    fn clear_creates_zero() {
        let state = run(vec![Statement::Clear("x".into())]).unwrap();
        assert_eq!(state.get("x"), Some(0));
    }

    #[test]
    fn clear_resets_existing_value() {
        let state = run(vec![Statement::Clear("x".into()),
                             Statement::Incr("x".into()),
                             Statement::Incr("x".into()),
                             Statement::Clear("x".into())]).unwrap();
        assert_eq!(state.get("x"), Some(0));
    }

    #[test]
    fn incr_and_decr_skip_undefined_variables() {
        let state = run(vec![Statement::Incr("x".into()), Statement::Decr("y".into())]).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn decr_goes_negative() {
        let state = run(vec![Statement::Clear("x".into()),
                             Statement::Decr("x".into()),
                             Statement::Decr("x".into())]).unwrap();
        assert_eq!(state.get("x"), Some(-2));
    }

    #[test]
    fn while_with_false_test_never_runs_body() {
        let state =
            run(vec![Statement::Clear("x".into()),
                     Statement::While { test: Expr::inequality(Expr::variable("x"),
                                                               Expr::variable("x")),
                                        body: Program::new(vec![Statement::Clear("y".into())]), }])
            .unwrap();
        assert_eq!(state.get("y"), None);
    }

    #[test]
    fn while_reading_undefined_variable_aborts() {
        let err = run(vec![Statement::While { test: Expr::inequality(Expr::variable("x"),
                                                                     Expr::integer(0)),
                                              body: Program::default(), }]).unwrap_err();
        assert_eq!(err, RuntimeError::UnknownVariable { name: "x".into() });
    }

    #[test]
    fn non_boolean_test_is_recovered_locally() {
        let state = run(vec![Statement::While { test: Expr::integer(1),
                                                body: Program::new(vec![Statement::Clear("y".into())]), },
                             Statement::Clear("z".into())]).unwrap();

        assert_eq!(state.get("y"), None);
        assert_eq!(state.get("z"), Some(0));
        assert_eq!(state.diagnostics(),
                   &[RuntimeError::ExpectedBoolean { found: "integer 1".into() }]);
    }

    #[test]
    fn nested_loops_multiply() {
        // a = 3 * 4 via repeated increments
        let inner = Statement::While { test: Expr::inequality(Expr::variable("j"),
                                                              Expr::integer(4)),
                                       body: Program::new(vec![Statement::Incr("j".into()),
                                                               Statement::Incr("a".into())]), };
        let outer = Statement::While { test: Expr::inequality(Expr::variable("i"),
                                                              Expr::integer(3)),
                                       body: Program::new(vec![Statement::Clear("j".into()),
                                                               inner,
                                                               Statement::Incr("i".into())]), };
        let state = run(vec![Statement::Clear("a".into()), Statement::Clear("i".into()), outer])
            .unwrap();

        assert_eq!(state.get("a"), Some(12));
        assert_eq!(state.get("i"), Some(3));
        assert_eq!(state.get("j"), Some(4));
    }
}
