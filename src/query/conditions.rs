//! Condition collectors: the ordered clause list behind every query.
//!
//! [`Conditions`] is generic over a [`PathScope`], which decides how field
//! names become paths and which prefix `and_where` applies:
//!
//! - [`Root`] (the [`SearchQuery`] and every group inside it): paths are used
//!   as given, `and_where` means `+`
//! - [`ArrayElements`] (inside `where_has`): paths gain the `Array[].` marker,
//!   `and_where` takes the prefix of the enclosing `where_has*` call
//!
//! Clause order is preserved exactly as appended. The API uses it for
//! relevance scoring.

use super::operator::{Operator, Prefix};
use super::path::{ArrayPath, FieldPath, PrefixBuilder};
use super::value::Value;
use crate::error::QueryError;
use std::fmt;

/// Anything that accepts rendered clause text
pub trait ClauseCollector: Sized {
    /// Append one rendered clause or group and hand the collector back
    fn add_clause(self, clause: String) -> Self;
}

/// How field names map to paths inside a collector
pub trait PathScope {
    /// Full path for `field` in this scope
    fn scoped_path(&self, field: &str) -> String;

    /// Prefix used by `and_where`
    fn default_prefix(&self) -> Prefix;
}

/// Top-level and grouped conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Root;

impl PathScope for Root {
    fn scoped_path(&self, field: &str) -> String {
        field.to_string()
    }

    fn default_prefix(&self) -> Prefix {
        Prefix::Must
    }
}

/// Conditions on the elements of an array field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayElements {
    array_path: String,
    prefix: Prefix,
}

impl PathScope for ArrayElements {
    fn scoped_path(&self, field: &str) -> String {
        format!("{}.{}", self.array_path, field)
    }

    fn default_prefix(&self) -> Prefix {
        self.prefix
    }
}

/// Ordered list of rendered clauses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions<S> {
    scope: S,
    clauses: Vec<String>,
}

/// Root search query, also used for the inside of groups
pub type SearchQuery = Conditions<Root>;

/// Collector handed to `where_has*` callbacks
pub type ArrayConditions = Conditions<ArrayElements>;

impl<S: PathScope> ClauseCollector for Conditions<S> {
    fn add_clause(mut self, clause: String) -> Self {
        self.clauses.push(clause);
        self
    }
}

impl<S: PathScope> Conditions<S> {
    /// Append raw clause text (a rendered condition or group)
    pub fn add_clause(self, clause: impl Into<String>) -> Self {
        ClauseCollector::add_clause(self, clause.into())
    }

    /// Rendered clauses in insertion order
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses joined by single spaces
    pub fn build(&self) -> String {
        self.clauses.join(" ")
    }

    fn condition(self, prefix: Prefix, field: &str) -> FieldPath<Self> {
        let path = self.scope.scoped_path(field);
        FieldPath::new(prefix, path, self)
    }

    fn shortcut(
        self,
        prefix: Prefix,
        field: &str,
        operator: &str,
        value: Value,
    ) -> Result<Self, QueryError> {
        let operator: Operator = operator.parse()?;
        Ok(self.condition(prefix, field).compare(operator, value))
    }

    /// Must (`+`) condition; inside `where_has*` it takes the outer prefix
    pub fn and_where(self, field: &str) -> FieldPath<Self> {
        let prefix = self.scope.default_prefix();
        self.condition(prefix, field)
    }

    /// `and_where(field).equals(value)`
    pub fn and_where_eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.and_where(field).equals(value)
    }

    /// `and_where` with an operator symbol (`=`, `~`, `>`, `<`, `>=`, `<=`)
    pub fn and_where_op(
        self,
        field: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> Result<Self, QueryError> {
        let prefix = self.scope.default_prefix();
        self.shortcut(prefix, field, operator, value.into())
    }

    /// `and_where` with a typed operator
    pub fn and_where_with(self, field: &str, operator: Operator, value: impl Into<Value>) -> Self {
        self.and_where(field).compare(operator, value)
    }

    /// Must-not (`-`) condition
    pub fn and_where_not(self, field: &str) -> FieldPath<Self> {
        self.condition(Prefix::MustNot, field)
    }

    pub fn and_where_not_eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.and_where_not(field).equals(value)
    }

    pub fn and_where_not_op(
        self,
        field: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> Result<Self, QueryError> {
        self.shortcut(Prefix::MustNot, field, operator, value.into())
    }

    pub fn and_where_not_with(
        self,
        field: &str,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.and_where_not(field).compare(operator, value)
    }

    /// Optional condition (no prefix).
    ///
    /// Without any `+` sibling this acts as OR. Next to `+` clauses it only
    /// raises the relevance score of matching rows.
    pub fn or_where(self, field: &str) -> FieldPath<Self> {
        self.condition(Prefix::Optional, field)
    }

    pub fn or_where_eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.or_where(field).equals(value)
    }

    pub fn or_where_op(
        self,
        field: &str,
        operator: &str,
        value: impl Into<Value>,
    ) -> Result<Self, QueryError> {
        self.shortcut(Prefix::Optional, field, operator, value.into())
    }

    pub fn or_where_with(self, field: &str, operator: Operator, value: impl Into<Value>) -> Self {
        self.or_where(field).compare(operator, value)
    }
}

impl SearchQuery {
    /// Empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a query with an unprefixed field condition
    pub fn on(field: &str) -> FieldPath<Self> {
        Self::new().and_on(field)
    }

    /// Start a query with a condition on array elements
    pub fn any(field: &str) -> ArrayPath<Self> {
        Self::new().and_any(field)
    }

    /// Start a query with a must (`+`) condition or group
    pub fn must() -> PrefixBuilder<Self> {
        Self::new().and_must()
    }

    /// Start a query with a must-not (`-`) condition or group
    pub fn must_not() -> PrefixBuilder<Self> {
        Self::new().and_must_not()
    }

    /// Start a query with an unprefixed group
    pub fn group<F>(build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        Self::new().and_group(build)
    }

    /// Continue with an unprefixed field condition
    pub fn and_on(self, field: &str) -> FieldPath<Self> {
        FieldPath::new(Prefix::Optional, field.to_string(), self)
    }

    /// Continue with a condition on array elements
    pub fn and_any(self, field: &str) -> ArrayPath<Self> {
        ArrayPath::new(Prefix::Optional, field, self)
    }

    pub fn and_must(self) -> PrefixBuilder<Self> {
        PrefixBuilder::new(Prefix::Must, self)
    }

    pub fn and_must_not(self) -> PrefixBuilder<Self> {
        PrefixBuilder::new(Prefix::MustNot, self)
    }

    pub fn and_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::Optional, build(SearchQuery::new()))
    }

    pub fn and_must_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::Must, build(SearchQuery::new()))
    }

    pub fn and_must_not_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::MustNot, build(SearchQuery::new()))
    }

    /// Must (`+`) group: `+(...)`
    pub fn where_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::Must, build(SearchQuery::new()))
    }

    /// Must-not (`-`) group: `-(...)`
    pub fn where_not_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::MustNot, build(SearchQuery::new()))
    }

    /// Optional group: `(...)`
    pub fn or_where_group<F>(self, build: F) -> Self
    where
        F: FnOnce(SearchQuery) -> SearchQuery,
    {
        self.push_group(Prefix::Optional, build(SearchQuery::new()))
    }

    pub fn try_where_group<F>(self, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(SearchQuery) -> Result<SearchQuery, QueryError>,
    {
        Ok(self.push_group(Prefix::Must, build(SearchQuery::new())?))
    }

    pub fn try_where_not_group<F>(self, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(SearchQuery) -> Result<SearchQuery, QueryError>,
    {
        Ok(self.push_group(Prefix::MustNot, build(SearchQuery::new())?))
    }

    pub fn try_or_where_group<F>(self, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(SearchQuery) -> Result<SearchQuery, QueryError>,
    {
        Ok(self.push_group(Prefix::Optional, build(SearchQuery::new())?))
    }

    /// Must conditions on elements of `array`: `+Array[].Field...`
    pub fn where_has<F>(self, array: &str, build: F) -> Self
    where
        F: FnOnce(ArrayConditions) -> ArrayConditions,
    {
        self.splice(build(Self::array_scope(array, Prefix::Must)))
    }

    /// Must-not conditions on elements of `array`: `-Array[].Field...`
    pub fn where_has_not<F>(self, array: &str, build: F) -> Self
    where
        F: FnOnce(ArrayConditions) -> ArrayConditions,
    {
        self.splice(build(Self::array_scope(array, Prefix::MustNot)))
    }

    /// Optional conditions on elements of `array`: `Array[].Field...`
    pub fn or_where_has<F>(self, array: &str, build: F) -> Self
    where
        F: FnOnce(ArrayConditions) -> ArrayConditions,
    {
        self.splice(build(Self::array_scope(array, Prefix::Optional)))
    }

    pub fn try_where_has<F>(self, array: &str, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(ArrayConditions) -> Result<ArrayConditions, QueryError>,
    {
        Ok(self.splice(build(Self::array_scope(array, Prefix::Must))?))
    }

    pub fn try_where_has_not<F>(self, array: &str, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(ArrayConditions) -> Result<ArrayConditions, QueryError>,
    {
        Ok(self.splice(build(Self::array_scope(array, Prefix::MustNot))?))
    }

    pub fn try_or_where_has<F>(self, array: &str, build: F) -> Result<Self, QueryError>
    where
        F: FnOnce(ArrayConditions) -> Result<ArrayConditions, QueryError>,
    {
        Ok(self.splice(build(Self::array_scope(array, Prefix::Optional))?))
    }

    fn push_group(self, prefix: Prefix, group: SearchQuery) -> Self {
        ClauseCollector::add_clause(self, format!("{}({})", prefix, group.build()))
    }

    fn array_scope(array: &str, prefix: Prefix) -> ArrayConditions {
        Conditions {
            scope: ArrayElements {
                array_path: format!("{}[]", array),
                prefix,
            },
            clauses: Vec::new(),
        }
    }

    // Array clauses are spliced flat, each keeping its own prefix
    fn splice(mut self, scoped: ArrayConditions) -> Self {
        self.clauses.extend(scoped.clauses);
        self
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_renders_empty() {
        assert_eq!(SearchQuery::new().build(), "");
        assert!(SearchQuery::new().is_empty());
    }

    #[test]
    fn test_add_clause_is_verbatim() {
        let q = SearchQuery::new().add_clause("+Raw=1").add_clause("-(x)");
        assert_eq!(q.clauses(), ["+Raw=1", "-(x)"]);
        assert_eq!(q.to_string(), "+Raw=1 -(x)");
    }

    #[test]
    fn test_build_is_repeatable() {
        let q = SearchQuery::new().and_where_eq("A", 1);
        assert_eq!(q.build(), q.build());
        assert_eq!(String::from(q), "+A=1");
    }

    #[test]
    fn test_array_scope_default_prefix() {
        let scope = SearchQuery::array_scope("Items", Prefix::MustNot);
        let scoped = scope.and_where("Level").greater_than(5);
        assert_eq!(scoped.build(), "-Items[].Level>5");
    }

    #[test]
    fn test_invalid_operator_leaves_no_clause() {
        let result = SearchQuery::new().and_where_eq("A", 1).and_where_op("B", "==", 2);
        assert_eq!(result, Err(QueryError::InvalidOperator("==".to_string())));
    }

    #[test]
    fn test_query_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchQuery>();
        assert_send_sync::<ArrayConditions>();
    }
}
