//! Query literals: the right-hand side of a condition.

use std::fmt;

/// A numeric operand for ordering comparisons
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // f64 Display is already minimal: 1.5 -> "1.5", 90.0 -> "90"
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(Int as i128: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
number_from!(Float as f64: f64);

// f32 keeps its own shortest text: 0.1f32 renders "0.1", not the widened f64 digits
impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(Number::from(n))
    }
}

/// A scalar literal in a condition
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(Number),
    Bool(bool),
}

impl Value {
    /// Unquoted text of the value, used when a string operand is required
    pub fn into_text(self) -> String {
        match self {
            Value::Str(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

/// Render a value in query-literal syntax.
///
/// Strings are quoted verbatim. Embedded `"` is not escaped, so callers
/// must keep quotes out of string operands.
pub fn format_value(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
