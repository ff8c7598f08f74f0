use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{i64_to_f64, shift_amount},
};

impl Context {
    /// Evaluates an operator on two integers.
    ///
    /// Arithmetic is checked: a result outside the `i64` range is an error
    /// instead of wrapping. `**` with a negative exponent is computed in
    /// floating point. `>>` is arithmetic and `>>>` is logical.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` by zero.
    /// - `IntegerOverflow` when the result does not fit in an `i64`.
    /// - `InvalidShift` for a shift amount outside `0..64`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pow = Context::eval_integer_infix(InfixOperator::Pow, 2, 10).unwrap();
    /// assert_eq!(pow, Value::Integer(1024));
    ///
    /// let shifted = Context::eval_integer_infix(InfixOperator::UnsignedShiftRight, -1, 60).unwrap();
    /// assert_eq!(shifted, Value::Integer(15));
    ///
    /// assert!(Context::eval_integer_infix(InfixOperator::Div, 1, 0).is_err());
    /// assert!(Context::eval_integer_infix(InfixOperator::Mul, i64::MAX, 2).is_err());
    /// ```
    pub fn eval_integer_infix(operator: InfixOperator, a: i64, b: i64) -> EvalResult<Value> {
        use InfixOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod,
            Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub, UnsignedShiftRight,
        };

        let overflow = || RuntimeError::IntegerOverflow { left: a,
                                                          operator,
                                                          right: b };

        let value = match operator {
            Add => a.checked_add(b).ok_or_else(overflow)?,
            Sub => a.checked_sub(b).ok_or_else(overflow)?,
            Mul => a.checked_mul(b).ok_or_else(overflow)?,
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero),
            Div => a.checked_div(b).ok_or_else(overflow)?,
            Mod => a.checked_rem(b).ok_or_else(overflow)?,
            Pow => match u32::try_from(b) {
                Ok(exponent) => a.checked_pow(exponent).ok_or_else(overflow)?,
                Err(_) if b < 0 => return Ok(Value::Float(i64_to_f64(a).powf(i64_to_f64(b)))),
                Err(_) => return Err(overflow()),
            },
            BitAnd => a & b,
            BitOr => a | b,
            BitXor => a ^ b,
            ShiftLeft => a << shift_amount(b)?,
            ShiftRight => a >> shift_amount(b)?,
            UnsignedShiftRight => {
                let bits = u64::from_ne_bytes(a.to_ne_bytes()) >> shift_amount(b)?;
                i64::from_ne_bytes(bits.to_ne_bytes())
            },
            Less => return Ok(Value::Boolean(a < b)),
            Greater => return Ok(Value::Boolean(a > b)),
            LessEqual => return Ok(Value::Boolean(a <= b)),
            GreaterEqual => return Ok(Value::Boolean(a >= b)),
            Equal => return Ok(Value::Boolean(a == b)),
            NotEqual => return Ok(Value::Boolean(a != b)),
            InfixOperator::And | InfixOperator::Or => {
                unreachable!("logical operators are handled before numeric dispatch")
            },
        };

        Ok(Value::Integer(value))
    }

    /// Evaluates an operator on two numbers where at least one is a float.
    /// The integer operand, if any, is converted to a float first.
    ///
    /// Float division follows IEEE 754, so dividing by zero yields an
    /// infinity or NaN rather than an error.
    pub(crate) fn eval_float_infix(operator: InfixOperator,
                                   left: &Value,
                                   right: &Value)
                                   -> EvalResult<Value> {
        use InfixOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };

        let (Some(a), Some(b)) = (as_float(left), as_float(right)) else {
            return Err(unsupported(operator, left, right));
        };

        Ok(match operator {
               Add => Value::Float(a + b),
               Sub => Value::Float(a - b),
               Mul => Value::Float(a * b),
               Div => Value::Float(a / b),
               Mod => Value::Float(a % b),
               Pow => Value::Float(a.powf(b)),
               Less => Value::Boolean(a < b),
               Greater => Value::Boolean(a > b),
               LessEqual => Value::Boolean(a <= b),
               GreaterEqual => Value::Boolean(a >= b),
               #[allow(clippy::float_cmp)]
               Equal => Value::Boolean(a == b),
               #[allow(clippy::float_cmp)]
               NotEqual => Value::Boolean(a != b),
               _ => return Err(unsupported(operator, left, right)),
           })
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(n) => Some(i64_to_f64(*n)),
        Value::Float(x) => Some(*x),
        _ => None,
    }
}
