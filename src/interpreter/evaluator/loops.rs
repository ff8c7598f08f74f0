use crate::{
    ast::{BlockStatement, Expression, Statement},
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `while (condition) { body }`.
    ///
    /// The condition is re-evaluated before every iteration and the loop
    /// runs while it is truthy. The body shares the surrounding scope, so
    /// bindings made in it persist after the loop. A `return` inside the body
    /// stops the loop and keeps unwinding.
    ///
    /// # Returns
    /// `null` once the condition turns falsy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     environment::Environment, evaluator::core::Context, lexer::Lexer, parser::core::Parser,
    ///     value::core::Value,
    /// };
    ///
    /// let source = "let i = 0; while (i < 3) { let i = i + 1; } i";
    /// let program = Parser::new(Lexer::new(source)).parse_program();
    /// let result = Context::new().eval(&program, &Environment::new());
    ///
    /// assert_eq!(result, Some(Value::Integer(3)));
    /// ```
    pub(crate) fn eval_while(&self,
                             condition: &Expression,
                             body: &BlockStatement,
                             env: &Environment)
                             -> EvalResult<Value> {
        while self.eval_expression(condition, env)?.is_truthy() {
            if let Some(value @ Value::Return(_)) = self.eval_block(body, env)? {
                return Ok(value);
            }
        }

        Ok(Value::Null)
    }

    /// Evaluates `for (init; check; iterate) { body }`.
    ///
    /// `init` runs once. Then, while `check` is truthy, the body runs
    /// followed by `iterate`. All clauses and the body share the surrounding
    /// scope.
    ///
    /// # Returns
    /// `null` once `check` turns falsy, or the pending `return` of the body.
    pub(crate) fn eval_for(&self,
                           init: &Statement,
                           check: &Expression,
                           iterate: &Statement,
                           body: &BlockStatement,
                           env: &Environment)
                           -> EvalResult<Value> {
        if let Some(value @ Value::Return(_)) = self.eval_statement(init, env)? {
            return Ok(value);
        }

        while self.eval_expression(check, env)?.is_truthy() {
            if let Some(value @ Value::Return(_)) = self.eval_block(body, env)? {
                return Ok(value);
            }
            if let Some(value @ Value::Return(_)) = self.eval_statement(iterate, env)? {
                return Ok(value);
            }
        }

        Ok(Value::Null)
    }
}
