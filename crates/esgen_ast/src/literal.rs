//! Literal constructors.

use crate::error::{ConstructionError, ConstructionResult};
use crate::node::Literal;
use bigdecimal::BigDecimal;
use std::any::Any;

/// The shared `null` literal.
pub const NULL: Literal = Literal::Null;

/// The shared `undefined` literal.
pub const UNDEFINED: Literal = Literal::Undefined;

pub fn string_literal(value: impl Into<String>) -> Literal {
    Literal::String(value.into())
}

pub fn bool_literal(value: bool) -> Literal {
    Literal::Boolean(value)
}

/// Build a numeric literal from any integer width, `f32`, `f64` or
/// [`BigDecimal`]. Other types produce
/// [`ConstructionError::UnsupportedNumber`].
pub fn number_literal<T: Any>(value: T) -> ConstructionResult<Literal> {
    let value: Box<dyn Any> = Box::new(value);

    macro_rules! try_numeric {
        ($value:ident, $($ty:ty),*) => {
            $(
                let $value = match $value.downcast::<$ty>() {
                    Ok(n) => return Ok(Literal::Number(*n as f64)),
                    Err(other) => other,
                };
            )*
        };
    }

    try_numeric!(value, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

    match value.downcast::<BigDecimal>() {
        Ok(n) => Ok(Literal::BigDecimal(*n)),
        Err(_) => Err(ConstructionError::UnsupportedNumber {
            type_name: std::any::type_name::<T>(),
        }),
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<BigDecimal> for Literal {
    fn from(value: BigDecimal) -> Self {
        Literal::BigDecimal(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}
