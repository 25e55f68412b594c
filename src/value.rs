use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::{DescribeOptions, Description, Matcher, Placeholder, Result};

/// A concrete value compared against placeholders, or an expected value
/// which may contain placeholders.
#[derive(Clone, Debug)]
pub enum Value {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Time(DateTime<FixedOffset>),
    Date(NaiveDate),
    Placeholder(Placeholder),
}

impl Value {
    /// Returns whether `actual` is accepted by `self`, used as the expected
    /// value.
    ///
    /// Placeholders in `self` are always invoked with the actual value as
    /// argument. Arrays and maps are compared element by element, stopping at
    /// the first mismatch. A concrete array or string in `self` compared
    /// against a placeholder in `actual` is routed to that placeholder only if
    /// it advertises the matching [`Coercions`](crate::Coercions).
    ///
    /// ### Example
    /// ```
    /// # use anyvalue::{array, Value, matchers::{any_integer, sorted_array}};
    /// let expected = array![1, any_integer()];
    ///
    /// assert_eq!(expected.matches(&array![1, 2]), Ok(true));
    /// assert_eq!(expected.matches(&array![2, 2]), Ok(false));
    ///
    /// assert_eq!(Value::from(vec![1, 2, 3]).matches(&sorted_array().into()), Ok(true));
    /// ```
    pub fn matches(&self, actual: &Value) -> Result<bool> {
        match (self, actual) {
            (Value::Placeholder(placeholder), _) => placeholder.equals(actual),
            (Value::Array(expected), Value::Array(actual)) => {
                if expected.len() != actual.len() {
                    return Ok(false);
                }

                for (expected, actual) in expected.iter().zip(actual) {
                    if !expected.matches(actual)? {
                        return Ok(false);
                    }
                }

                Ok(true)
            }
            (Value::Map(expected), Value::Map(actual)) => {
                if expected.len() != actual.len() {
                    return Ok(false);
                }

                for (key, expected) in expected {
                    match actual.get(key) {
                        Some(actual) if expected.matches(actual)? => (),
                        _ => return Ok(false),
                    }
                }

                Ok(true)
            }
            (Value::Array(_), Value::Placeholder(placeholder))
                if placeholder.coercions().sequence =>
            {
                placeholder.equals(self)
            }
            (Value::String(_), Value::Placeholder(placeholder)) if placeholder.coercions().text => {
                placeholder.equals(self)
            }
            (expected, actual) => Ok(expected == actual),
        }
    }

    /// Returns a description of this value as an expectation.
    pub fn describe<'a>(&'a self, options: &'a DescribeOptions) -> ValueDescription<'a> {
        ValueDescription {
            value: self,
            options,
        }
    }

    /// Name of the kind of this value, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Time(_) => "time",
            Value::Date(_) => "date",
            Value::Placeholder(_) => "placeholder",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
                *i as f64 == *f
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Placeholder(a), Value::Placeholder(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    /// Natural ordering of values. Numbers compare across integers and
    /// floats; strings, times, dates and arrays compare among themselves.
    /// Every other pair is unordered unless equal.
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            (a, b) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.describe(&DescribeOptions::new()).fmt(f)
    }
}

/// [`Display`] adapter returned by [`Value::describe`].
pub struct ValueDescription<'a> {
    value: &'a Value,
    options: &'a DescribeOptions,
}

impl Display for ValueDescription<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let options = self.options;

        match self.value {
            Value::Placeholder(placeholder) => {
                return write!(f, "<{}>", Description::new(placeholder, options))
            }
            _ if options.is_negated => f.write_str("not ")?,
            _ => (),
        }

        match self.value {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(values) => ValueList(values).fmt(f),
            Value::Map(entries) => {
                f.write_str("{")?;

                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{key:?}: {value}")?;
                }

                f.write_str("}")
            }
            Value::Time(time) => write!(f, "{}", time.to_rfc3339()),
            Value::Date(date) => write!(f, "{date}"),
            Value::Placeholder(_) => Ok(()),
        }
    }
}

/// Renders values as `[a, b, c]`.
pub(crate) struct ValueList<'a>(pub &'a [Value]);

impl Display for ValueList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;

        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            value.fmt(f)?;
        }

        f.write_str("]")
    }
}

/// Builds a [`Value::Array`] from heterogeneous elements, each converted with
/// [`Value::from`].
///
/// ```
/// # use anyvalue::{array, Value, matchers::anything};
/// let value = array![1, "two", anything()];
///
/// assert_eq!(value.as_array().map(|a| a.len()), Some(3));
/// ```
#[macro_export]
macro_rules! array {
    ( $( $value: expr ),* $(,)? ) => {
        $crate::Value::Array(std::vec![ $( $crate::Value::from($value) ),* ])
    };
}

/// Builds a [`Value::Map`] from `key => value` pairs.
///
/// ```
/// # use anyvalue::{assert_that, map, matchers::any_integer};
/// assert_that!(
///     map! { "id" => 12, "name" => "Alice" },
///     map! { "id" => any_integer(), "name" => "Alice" });
/// ```
#[macro_export]
macro_rules! map {
    ( $( $key: expr => $value: expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut entries = std::collections::BTreeMap::new();
        $( entries.insert(std::string::String::from($key), $crate::Value::from($value)); )*
        $crate::Value::Map(entries)
    }};
}

macro_rules! from_integer {
    ( $( $ty: ty ),* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value.into())
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_integer {
    ( $( $ty: ty ),* ) => {
        $(
            impl From<$ty> for Value {
                /// Values which do not fit an `i64` are kept as floats.
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => Value::Integer(value),
                        Err(_) => Value::Float(value as f64),
                    }
                }
            }
        )*
    };
}

from_wide_integer!(u64, usize, isize, i128, u128);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(entries: BTreeMap<K, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, T: Into<Value>, S> From<HashMap<K, T, S>> for Value {
    fn from(entries: HashMap<K, T, S>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(time: DateTime<Tz>) -> Self {
        let offset = time.offset().fix();

        Value::Time(time.with_timezone(&offset))
    }
}

impl From<NaiveDateTime> for Value {
    /// Naive date-times are interpreted as UTC.
    fn from(time: NaiveDateTime) -> Self {
        Utc.from_utc_datetime(&time).into()
    }
}

impl From<SystemTime> for Value {
    fn from(time: SystemTime) -> Self {
        DateTime::<Utc>::from(time).into()
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date)
    }
}

impl From<Placeholder> for Value {
    fn from(placeholder: Placeholder) -> Self {
        Value::Placeholder(placeholder)
    }
}

impl From<&Placeholder> for Value {
    fn from(placeholder: &Placeholder) -> Self {
        Value::Placeholder(placeholder.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    /// JSON numbers become integers when they fit an `i64`, and floats
    /// otherwise.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(values) => values.into(),
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
