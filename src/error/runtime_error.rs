use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The evaluator propagates these with `?` and turns them into
/// `Value::Error` at its public boundary, so scripts observe them as values.
/// The `Display` text is the message carried by that value.
pub enum RuntimeError {
    /// Operands of different kinds met a binary operator.
    TypeMismatch {
        /// Kind of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Kind of the right operand.
        right:    &'static str,
    },
    /// The operator is not defined for these operand kinds.
    UnknownInfixOperator {
        /// Kind of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Kind of the right operand.
        right:    &'static str,
    },
    /// The prefix operator is not defined for the operand kind.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Kind of the operand.
        right:    &'static str,
    },
    /// A name is bound neither in scope nor as a builtin.
    IdentifierNotFound {
        /// The name.
        name: String,
    },
    /// Something other than a function was called.
    NotAFunction {
        /// Kind of the callee.
        kind: &'static str,
    },
    /// A value that cannot be hashed was used as a hash key.
    UnusableHashKey {
        /// Kind of the key.
        kind: &'static str,
    },
    /// The value cannot be indexed.
    IndexNotSupported {
        /// Kind of the indexed value.
        kind: &'static str,
    },
    /// The value cannot be the target of `let x[i] = v`.
    IndexAssignmentNotSupported {
        /// Kind of the target.
        kind: &'static str,
    },
    /// An index or slice bound of the wrong kind for its target.
    InvalidIndex {
        /// Kind of the indexed value.
        target: &'static str,
        /// Kind of the index.
        index:  &'static str,
    },
    /// Index assignment outside the bounds of an array.
    IndexOutOfRange {
        /// The requested index.
        index:  i64,
        /// The array length.
        length: usize,
    },
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    IntegerOverflow {
        /// Left operand.
        left:     i64,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    i64,
    },
    /// Negation of `i64::MIN`.
    NegationOverflow {
        /// The operand.
        value: i64,
    },
    /// A shift amount outside `0..64`.
    InvalidShift {
        /// The requested amount.
        amount: i64,
    },
    /// Range bounds that are not both integers.
    InvalidRange {
        /// Kind of the lower bound.
        start: &'static str,
        /// Kind of the upper bound.
        end:   &'static str,
    },
    /// A range with more elements than an array may be built with.
    RangeTooLarge {
        /// The lower bound.
        start: i64,
        /// The upper bound.
        end:   i64,
        /// The largest number of elements allowed.
        limit: i64,
    },
    /// `++` or `--` applied to something that is not a numeric variable.
    InvalidStepTarget {
        /// Description of the operand.
        target: String,
    },
    /// An error value raised by a builtin function.
    Builtin(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::IndexNotSupported { kind } => write!(f, "index operator not supported: {kind}"),
            Self::IndexAssignmentNotSupported { kind } => {
                write!(f, "index assignment not supported: {kind}")
            },
            Self::InvalidIndex { target, index } => write!(f, "invalid index: {target}[{index}]"),
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index out of range: {index} (length {length})")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { left,
                                    operator,
                                    right, } => {
                write!(f, "integer overflow: {left} {operator} {right}")
            },
            Self::NegationOverflow { value } => write!(f, "integer overflow: -{value}"),
            Self::InvalidShift { amount } => write!(f, "invalid shift amount: {amount}"),
            Self::InvalidRange { start, end } => {
                write!(f, "range bounds must be INTEGER, got {start}..{end}")
            },
            Self::RangeTooLarge { start, end, limit } => {
                write!(f, "range {start} to {end} exceeds {limit} elements")
            },
            Self::InvalidStepTarget { target } => {
                write!(f, "cannot increment or decrement {target}")
            },
            Self::Builtin(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for RuntimeError {}
