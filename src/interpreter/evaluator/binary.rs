/// Binary operator dispatch by operand kind.
pub mod core;

/// Integer and float arithmetic, comparison, bitwise and shift operators.
pub mod scalar;

/// String operators.
pub mod comparison;

/// Array concatenation and ranges.
pub mod array;
