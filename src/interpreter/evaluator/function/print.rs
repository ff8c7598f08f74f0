use crate::interpreter::{environment::Environment, value::core::Value};

/// Writes each argument on its own line to the environment's output sink
/// and returns `null`.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::{Environment, Output},
///     evaluator::function::print::puts,
///     value::core::Value,
/// };
///
/// let output = Output::captured();
/// let env = Environment::with_output(output.clone());
///
/// let result = puts(&env, &[Value::Integer(42), Value::from("hi")]);
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(output.contents(), "42\nhi\n");
/// ```
pub fn puts(env: &Environment, args: &[Value]) -> Value {
    let text = args.iter().map(|arg| format!("{arg}\n")).collect::<String>();
    write(env, &text)
}

/// Writes the arguments separated by spaces, followed by a newline, and
/// returns `null`.
pub fn print(env: &Environment, args: &[Value]) -> Value {
    let line = args.iter().map(Value::inspect).collect::<Vec<_>>().join(" ");
    write(env, &format!("{line}\n"))
}

fn write(env: &Environment, text: &str) -> Value {
    match env.output().write(text) {
        Ok(()) => Value::Null,
        Err(error) => Value::Error(format!("could not write output: {error}")),
    }
}
