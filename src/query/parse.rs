//! Parse `Field<op>value` condition text into builder calls.
//!
//! Used by the command line, where conditions arrive as plain strings:
//!
//! ```text
//! Level>=90            -> ("Level", >=, 90)
//! Name~"Hi-Potion"     -> ("Name", ~, "Hi-Potion")
//! ClassJobCategory.PCT=true
//! ```

use super::conditions::{Conditions, PathScope};
use super::operator::{Operator, Prefix};
use super::value::{Number, Value};
use crate::error::QueryError;

const OPERATOR_CHARS: &[char] = &['=', '~', '<', '>', '!'];

/// A parsed condition, not yet attached to a query
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    /// Append this condition through `and_where`, `and_where_not` or `or_where`.
    ///
    /// `Prefix::Must` goes through `and_where`, so inside `where_has*` it
    /// takes the outer prefix like any other `and_where` call.
    pub fn apply<S: PathScope>(self, conditions: Conditions<S>, prefix: Prefix) -> Conditions<S> {
        match prefix {
            Prefix::Must => conditions.and_where_with(&self.field, self.operator, self.value),
            Prefix::MustNot => conditions.and_where_not_with(&self.field, self.operator, self.value),
            Prefix::Optional => conditions.or_where_with(&self.field, self.operator, self.value),
        }
    }
}

/// Parse one condition.
///
/// The operator is the first run of `= ~ < > !` characters, so `Name!=x`
/// reports `!=` as the unknown operator.
pub fn parse_condition(text: &str) -> Result<Condition, QueryError> {
    let start = text
        .find(OPERATOR_CHARS)
        .ok_or_else(|| QueryError::MalformedCondition(text.to_string()))?;
    let rest = &text[start..];
    let len = rest
        .find(|c: char| !OPERATOR_CHARS.contains(&c))
        .unwrap_or(rest.len());

    let field = text[..start].trim();
    if field.is_empty() {
        return Err(QueryError::MalformedCondition(text.to_string()));
    }

    let operator: Operator = rest[..len].parse()?;
    let value = parse_value(rest[len..].trim());

    Ok(Condition {
        field: field.to_string(),
        operator,
        value,
    })
}

/// Interpret literal text: booleans, integers, floats, quoted or bare strings
pub fn parse_value(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = text.parse::<i128>() {
        return Value::Number(Number::Int(n));
    }

    // Reject "inf"/"nan" spellings that f64 would accept
    if text.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
        if let Ok(n) = text.parse::<f64>() {
            if n.is_finite() {
                return Value::Number(Number::Float(n));
            }
        }
    }

    let unquoted = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text);
    Value::Str(unquoted.to_string())
}
