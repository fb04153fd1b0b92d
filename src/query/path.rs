//! Field-path builders.
//!
//! Each builder stage is its own type, so the stage decides what can be
//! called next:
//!
//! - [`FieldPath`] can nest (`on`), localize, or terminate
//! - [`LocalizedPath`] can only terminate
//! - [`ArrayPath`] must descend into one element field with `on`
//! - [`PrefixBuilder`] holds a `+`/`-` prefix until a path or group is chosen
//!
//! Every terminator hands the owning collector back to the caller.

use super::conditions::{ClauseCollector, SearchQuery};
use super::operator::{Operator, Prefix};
use super::value::{Number, Value};
use crate::error::QueryError;
use crate::types::Language;

/// Append `prefix + path + operator + literal` to the collector
fn terminate<C: ClauseCollector>(
    collector: C,
    prefix: Prefix,
    path: &str,
    operator: Operator,
    value: Value,
) -> C {
    let value = match operator {
        Operator::Contains => Value::Str(value.into_text()),
        _ => value,
    };
    collector.add_clause(format!("{}{}{}{}", prefix, path, operator, value))
}

macro_rules! terminators {
    () => {
        /// Field equals value
        pub fn equals(self, value: impl Into<Value>) -> C {
            self.compare(Operator::Equals, value)
        }

        /// Field contains string (fuzzy match)
        pub fn contains(self, value: impl Into<String>) -> C {
            self.compare(Operator::Contains, Value::Str(value.into()))
        }

        /// Field is greater than value
        pub fn greater_than(self, value: impl Into<Number>) -> C {
            self.compare(Operator::GreaterThan, Value::Number(value.into()))
        }

        /// Field is less than value
        pub fn less_than(self, value: impl Into<Number>) -> C {
            self.compare(Operator::LessThan, Value::Number(value.into()))
        }

        /// Field is greater than or equal to value
        pub fn greater_or_equal(self, value: impl Into<Number>) -> C {
            self.compare(Operator::GreaterOrEqual, Value::Number(value.into()))
        }

        /// Field is less than or equal to value
        pub fn less_or_equal(self, value: impl Into<Number>) -> C {
            self.compare(Operator::LessOrEqual, Value::Number(value.into()))
        }

        /// Terminate with an operator chosen at runtime.
        ///
        /// `Contains` takes the unquoted text of any value.
        pub fn compare(self, operator: Operator, value: impl Into<Value>) -> C {
            terminate(self.collector, self.prefix, &self.path, operator, value.into())
        }
    };
}

/// Field path that can still be extended
#[derive(Debug)]
#[must_use = "a field path adds nothing until a terminator is called"]
pub struct FieldPath<C> {
    prefix: Prefix,
    path: String,
    collector: C,
}

impl<C: ClauseCollector> FieldPath<C> {
    pub(crate) fn new(prefix: Prefix, path: String, collector: C) -> Self {
        Self {
            prefix,
            path,
            collector,
        }
    }

    /// Access a nested field: `ClassJobCategory.PCT`
    pub fn on(mut self, field: &str) -> Self {
        self.path.push('.');
        self.path.push_str(field);
        self
    }

    /// Restrict the field to one language: `Name@ja`.
    ///
    /// No further path segments can follow.
    pub fn localized_to(self, language: Language) -> LocalizedPath<C> {
        LocalizedPath {
            prefix: self.prefix,
            path: format!("{}@{}", self.path, language.code()),
            collector: self.collector,
        }
    }

    /// Alias of [`localized_to`](Self::localized_to)
    pub fn lang(self, language: Language) -> LocalizedPath<C> {
        self.localized_to(language)
    }

    /// Path rendered so far, without prefix
    pub fn path(&self) -> &str {
        &self.path
    }

    terminators!();
}

/// Localized field path: only terminators remain
#[derive(Debug)]
#[must_use = "a field path adds nothing until a terminator is called"]
pub struct LocalizedPath<C> {
    prefix: Prefix,
    path: String,
    collector: C,
}

impl<C: ClauseCollector> LocalizedPath<C> {
    pub fn path(&self) -> &str {
        &self.path
    }

    terminators!();
}

/// Path positioned on array elements (`BaseParam[]`).
///
/// An element field must be chosen with [`on`](Self::on) before any
/// terminator is available.
#[derive(Debug)]
#[must_use = "an array path adds nothing until a terminator is called"]
pub struct ArrayPath<C> {
    prefix: Prefix,
    path: String,
    collector: C,
}

impl<C: ClauseCollector> ArrayPath<C> {
    pub(crate) fn new(prefix: Prefix, field: &str, collector: C) -> Self {
        Self {
            prefix,
            path: format!("{}[]", field),
            collector,
        }
    }

    /// Access a field on each element: `BaseParam[].Name`
    pub fn on(self, field: &str) -> FieldPath<C> {
        FieldPath::new(
            self.prefix,
            format!("{}.{}", self.path, field),
            self.collector,
        )
    }
}

/// Builder state after `must()` or `must_not()`
#[derive(Debug)]
#[must_use = "a prefix adds nothing until a path or group follows"]
pub struct PrefixBuilder<C> {
    prefix: Prefix,
    collector: C,
}

impl<C: ClauseCollector> PrefixBuilder<C> {
    pub(crate) fn new(prefix: Prefix, collector: C) -> Self {
        Self { prefix, collector }
    }

    /// Start a field path carrying this prefix
    pub fn on(self, field: &str) -> FieldPath<C> {
        FieldPath::new(self.prefix, field.to_string(), self.collector)
    }

    /// Start an array-element path carrying this prefix
    pub fn any(self, field: &str) -> ArrayPath<C> {
        ArrayPath::new(self.prefix, field, self.collector)
    }

    /// Append a parenthesized group carrying this prefix
    pub fn group<F>(self, build: F) -> C
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        let group = build(SearchQuery::new());
        self.collector
            .add_clause(format!("{}({})", self.prefix, group.build()))
    }

    /// Like [`group`](Self::group), for callbacks using fallible shortcuts
    pub fn try_group<F>(self, build: F) -> Result<C, QueryError>
    where
        F: FnOnce(SearchQuery) -> Result<SearchQuery, QueryError>,
    {
        let group = build(SearchQuery::new())?;
        Ok(self
            .collector
            .add_clause(format!("{}({})", self.prefix, group.build())))
    }
}
