use tracing::debug;

use crate::{
    ast::{BlockStatement, Expression, Identifier, LetStatement, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::{BUILTIN_TABLE, Builtin},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Errors become [`Value::Error`]
/// only at the boundary, in [`Context::eval`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Bindings live in [`Environment`]s passed alongside each call, so one
/// `Context` can evaluate any number of programs against any number of
/// environments. The context itself holds the builtin function table that
/// identifiers fall back to when no binding is found.
pub struct Context {
    builtins: &'static [Builtin],
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that knows the standard builtins.
    #[must_use]
    pub const fn new() -> Self {
        Self { builtins: BUILTIN_TABLE }
    }

    /// Creates a context with a custom builtin table.
    #[must_use]
    pub const fn with_builtins(builtins: &'static [Builtin]) -> Self {
        Self { builtins }
    }

    /// Finds the builtin named `name`.
    #[must_use]
    pub fn lookup_builtin(&self, name: &str) -> Option<&'static Builtin> {
        self.builtins.iter().find(|builtin| builtin.name == name)
    }

    /// Evaluates a program and returns the value of its last statement.
    ///
    /// - A top-level `return` ends the program with its value.
    /// - A runtime error ends the program with a [`Value::Error`].
    /// - A program whose last statement yields nothing (such as `let` or a
    ///   comment) returns `None`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     environment::Environment, evaluator::core::Context, lexer::Lexer, parser::core::Parser,
    ///     value::core::Value,
    /// };
    ///
    /// let program = Parser::new(Lexer::new("let a = 5; a * 2")).parse_program();
    /// let env = Environment::new();
    ///
    /// assert_eq!(Context::new().eval(&program, &env), Some(Value::Integer(10)));
    /// ```
    pub fn eval(&self, program: &Program, env: &Environment) -> Option<Value> {
        match self.eval_program(program, env) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, "evaluation ended in an error");
                Some(Value::Error(error.to_string()))
            },
        }
    }

    fn eval_program(&self, program: &Program, env: &Environment) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;

            if let Some(Value::Return(value)) = result {
                return Ok(Some(*value));
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in `env`.
    ///
    /// A `return` stops the block and is passed up still wrapped in
    /// [`Value::Return`], so every enclosing block stops too until a function
    /// call or the program unwraps it.
    pub(crate) fn eval_block(&self,
                             block: &BlockStatement,
                             env: &Environment)
                             -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;

            if matches!(result, Some(Value::Return(_))) {
                return Ok(result);
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// - `None` for `let` and comments.
    /// - `Some(Value::Return(..))` for `return`.
    /// - `Some(value)` for expression statements.
    pub fn eval_statement(&self,
                          statement: &Statement,
                          env: &Environment)
                          -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let(statement) => self.eval_let(statement, env),
            Statement::Return { value, .. } => {
                let value = self.eval_expression(value, env)?;
                Ok(Some(match value {
                            Value::Return(_) => value,
                            value => Value::Return(Box::new(value)),
                        }))
            },
            Statement::Expression { expression, .. } => {
                self.eval_expression(expression, env).map(Some)
            },
            Statement::Comment { .. } => Ok(None),
        }
    }

    /// Evaluates `let name = value` and `let name[index] = value`.
    ///
    /// A plain binding always targets the current scope. A value that is
    /// still unwinding from a `return` is passed on instead of being bound.
    fn eval_let(&self, statement: &LetStatement, env: &Environment) -> EvalResult<Option<Value>> {
        let value = self.eval_expression(&statement.value, env)?;
        if let Value::Return(_) = value {
            return Ok(Some(value));
        }

        match &statement.index {
            Some(index) => self.eval_index_assignment(&statement.name, index, value, env)?,
            None => {
                env.set(statement.name.name.as_str(), value);
            },
        }

        Ok(None)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main dispatch of the evaluator. Operands are always
    /// evaluated left to right, and the first error stops evaluation.
    pub fn eval_expression(&self, expression: &Expression, env: &Environment) -> EvalResult<Value> {
        match expression {
            Expression::Identifier(identifier) => self.eval_identifier(identifier, env),
            Expression::Integer { value, .. } => Ok(Value::Integer(*value)),
            Expression::Float { value, .. } => Ok(Value::Float(*value)),
            Expression::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expression::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Expression::Prefix { operator, right, .. } => {
                let right = self.eval_expression(right, env)?;
                Self::eval_prefix(*operator, &right)
            },
            Expression::Infix { left,
                                operator,
                                right,
                                .. } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Self::eval_infix(*operator, &left, &right)
            },
            Expression::If { condition,
                             consequence,
                             alternative,
                             .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expression::Function { parameters, body, .. } => {
                Ok(Self::make_function(parameters, body, env))
            },
            Expression::Call { function,
                               arguments,
                               .. } => {
                let function = self.eval_expression(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&function, &arguments, env)
            },
            Expression::Array { elements, .. } => {
                Ok(Value::from(self.eval_expressions(elements, env)?))
            },
            Expression::Index { left,
                                index,
                                has_colon,
                                end,
                                .. } => {
                let target = self.eval_expression(left, env)?;
                let index = self.eval_optional(index.as_deref(), env)?;
                if *has_colon {
                    let end = self.eval_optional(end.as_deref(), env)?;
                    Self::eval_slice(&target, index.as_ref(), end.as_ref())
                } else {
                    let index = index.unwrap_or(Value::Null);
                    Self::eval_index(&target, &index)
                }
            },
            Expression::Hash { pairs, .. } => self.eval_hash_literal(pairs, env),
            Expression::While { condition, body, .. } => self.eval_while(condition, body, env),
            Expression::For { init,
                              check,
                              iterate,
                              body,
                              .. } => self.eval_for(init, check, iterate, body, env),
            Expression::Increment { operand, prefix, .. } => {
                Self::eval_step(operand, 1, *prefix, env)
            },
            Expression::Decrement { operand, prefix, .. } => {
                Self::eval_step(operand, -1, *prefix, env)
            },
            Expression::Range { start,
                                inclusive,
                                end,
                                .. } => {
                let start = self.eval_expression(start, env)?;
                let end = self.eval_expression(end, env)?;
                Self::eval_range(&start, &end, *inclusive)
            },
        }
    }

    /// Evaluates each expression in order, stopping at the first error.
    pub(crate) fn eval_expressions(&self,
                                   expressions: &[Expression],
                                   env: &Environment)
                                   -> EvalResult<Vec<Value>> {
        expressions.iter()
                   .map(|expression| self.eval_expression(expression, env))
                   .collect()
    }

    fn eval_optional(&self,
                     expression: Option<&Expression>,
                     env: &Environment)
                     -> EvalResult<Option<Value>> {
        expression.map(|expression| self.eval_expression(expression, env))
                  .transpose()
    }

    /// Resolves a name: first through the environment chain, then among the
    /// builtins.
    fn eval_identifier(&self, identifier: &Identifier, env: &Environment) -> EvalResult<Value> {
        env.get(&identifier.name)
           .or_else(|| self.lookup_builtin(&identifier.name).map(Value::Builtin))
           .ok_or_else(|| RuntimeError::IdentifierNotFound { name: identifier.name.clone() })
    }

    /// Evaluates an `if` expression. A falsy condition without an `else`
    /// yields `null`, as does a taken branch with no statements.
    fn eval_if(&self,
               condition: &Expression,
               consequence: &BlockStatement,
               alternative: Option<&BlockStatement>,
               env: &Environment)
               -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            alternative
        };

        match branch {
            Some(block) => Ok(self.eval_block(block, env)?.unwrap_or(Value::Null)),
            None => Ok(Value::Null),
        }
    }
}
