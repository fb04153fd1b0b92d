pub mod conditions;
pub mod field;
pub mod operator;
pub mod parse;
pub mod path;
pub mod value;

pub use conditions::{
    ArrayConditions, ArrayElements, ClauseCollector, Conditions, PathScope, Root, SearchQuery,
};
pub use field::Field;
pub use operator::{Operator, Prefix};
pub use parse::{parse_condition, parse_value, Condition};
pub use path::{ArrayPath, FieldPath, LocalizedPath, PrefixBuilder};
pub use value::{format_value, Number, Value};
