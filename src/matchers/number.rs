use crate::{self as anyvalue, matcher, Value};

/// Returns the parity of a number, if it has one.
///
/// Floats only have a parity when they have no fractional part.
fn remainder_by_two(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(i.rem_euclid(2)),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f.rem_euclid(2.0) as i64),
        _ => None,
    }
}

/// Returns a [`Matcher`](crate::Matcher) that accepts integers.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_integer};
/// assert_that!(42, any_integer());
///
/// refute_that!("foo", any_integer());
/// refute_that!(1.0, any_integer());
/// ```
#[matcher(expected = ("{} integer", switch("is an", "is not an")))]
pub fn any_integer(value: &Value) -> bool {
    matches!(value, Value::Integer(_))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts integers and floats.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_number};
/// assert_that!(42, any_number());
/// assert_that!(42.0, any_number());
///
/// refute_that!("foo", any_number());
/// ```
#[matcher(expected = ("{} number", switch("is a", "is not a")))]
pub fn any_number(value: &Value) -> bool {
    value.is_number()
}

/// Returns a [`Matcher`](crate::Matcher) that accepts even numbers.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::even_number};
/// assert_that!(2, even_number());
/// assert_that!(-4.0, even_number());
///
/// refute_that!(1, even_number());
/// refute_that!(2.5, even_number());
/// ```
#[matcher(expected = ("{} even number", switch("is an", "is not an")))]
pub fn even_number(value: &Value) -> bool {
    remainder_by_two(value) == Some(0)
}

/// Returns a [`Matcher`](crate::Matcher) that accepts odd numbers.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::odd_number};
/// assert_that!(1, odd_number());
/// assert_that!(-3, odd_number());
///
/// refute_that!(2, odd_number());
/// refute_that!("1", odd_number());
/// ```
#[matcher(expected = ("{} odd number", switch("is an", "is not an")))]
pub fn odd_number(value: &Value) -> bool {
    remainder_by_two(value) == Some(1)
}
