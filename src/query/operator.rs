//! Comparison operators and clause prefixes.

use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// Comparison operator between a field path and a literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` exact match
    Equals,
    /// `~` partial / fuzzy string match
    Contains,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Equals,
        Operator::Contains,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
    ];

    /// Wire symbol for this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::Contains => "~",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| QueryError::InvalidOperator(s.to_string()))
    }
}

/// Matching mode of a clause or group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Prefix {
    /// `+` results must match
    Must,
    /// `-` results must not match
    MustNot,
    /// no prefix: OR when no `+` sibling exists, relevance boost otherwise
    #[default]
    Optional,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Must => "+",
            Prefix::MustNot => "-",
            Prefix::Optional => "",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            "!=".parse::<Operator>(),
            Err(QueryError::InvalidOperator("!=".to_string()))
        );
        assert!("".parse::<Operator>().is_err());
        assert!("=>".parse::<Operator>().is_err());
    }

    #[test]
    fn test_prefix_symbols() {
        assert_eq!(Prefix::Must.to_string(), "+");
        assert_eq!(Prefix::MustNot.to_string(), "-");
        assert_eq!(Prefix::Optional.to_string(), "");
    }
}
