use std::cmp::Ordering;
use std::fmt::Formatter;

use crate::value::ValueList;
use crate::{
    self as anyvalue, matcher, Coercions, DescribeOptions, Description, Error, Matcher,
    Placeholder, Result, Value,
};

/// Returns a [`Matcher`] that accepts any of the given values.
///
/// Each allowed value is compared as an expected value, so it may itself be
/// or contain a placeholder. See also [`one_of!`](crate::one_of!).
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, Value, matchers::one_of};
/// let animals = one_of(vec![Value::from("dog"), Value::from("cat")]);
/// let animals = anyvalue::Placeholder::from(animals);
///
/// assert_that!("dog", &animals);
/// refute_that!("chair", &animals);
/// ```
#[matcher(expected = ("{} {}", switch("is one of", "is none of"), ValueList(values)))]
pub fn one_of(values: Vec<Value>, value: &Value) -> Result<bool> {
    for allowed in values {
        if allowed.matches(value)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Returns a [`Matcher`] that accepts any of the given values, converting
/// each of them with [`Value::from`].
///
/// ```
/// # use anyvalue::{assert_that, one_of, refute_that, matchers::any_integer};
/// assert_that!(3, one_of!("three", any_integer()));
/// refute_that!(3.5, one_of!("three", any_integer()));
/// ```
#[macro_export]
macro_rules! one_of {
    ( $( $value: expr ),* $(,)? ) => {
        $crate::matchers::one_of(std::vec![ $( $crate::Value::from($value) ),* ])
    };
}

/// Returns a [`Matcher`] that accepts arrays sorted in ascending order.
///
/// It may stand in for an array. Arrays whose elements cannot be ordered
/// against each other are reported as an [`Error::Incomparable`].
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::sorted_array};
/// assert_that!(vec![1, 2, 3], sorted_array());
/// assert_that!(Vec::<i32>::new(), sorted_array());
///
/// refute_that!(vec![3, 2, 1], sorted_array());
/// refute_that!("abc", sorted_array());
/// ```
///
/// ```should_panic
/// # use anyvalue::{array, assert_that, matchers::sorted_array};
/// assert_that!(array![1, "a"], sorted_array());  // cannot be evaluated
/// ```
#[matcher(expected = ("{} sorted array", switch("is a", "is not a")), coerces = Coercions::SEQUENCE)]
pub fn sorted_array(value: &Value) -> Result<bool> {
    let values = match value.as_array() {
        Some(values) => values,
        None => return Ok(false),
    };

    for pair in values.windows(2) {
        match pair[0].partial_cmp(&pair[1]) {
            Some(Ordering::Greater) => return Ok(false),
            Some(_) => (),
            None => return Err(Error::incomparable(&pair[1], &pair[0])),
        }
    }

    Ok(true)
}

/// [`Matcher`] returned by [`array_of`].
pub struct ArrayOf {
    element: Placeholder,
}

impl Matcher for ArrayOf {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        let values = match candidate.as_array() {
            Some(values) => values,
            None => return Ok(false),
        };

        for (index, value) in values.iter().enumerate() {
            if !self.element.equals(value)? {
                tracing::trace!(index, %value, "array element rejected");

                return Ok(false);
            }
        }

        Ok(true)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        if options.is_negated {
            write!(
                f,
                "is not an array or has an element which {}",
                Description::new(&self.element, options)
            )
        } else {
            write!(
                f,
                "is an array where each element {}",
                Description::new(&self.element, options)
            )
        }
    }
}

crate::__impl_placeholder!(ArrayOf);

/// Returns a [`Matcher`] that accepts arrays whose elements are all accepted
/// by `element`. Empty arrays are always accepted.
///
/// `element` must be a placeholder; any other value is rejected with
/// [`Error::InvalidArgument`].
///
/// ### Example
/// ```
/// # use anyvalue::{array, assert_that, refute_that, Error, matchers::{any_integer, array_of}};
/// let integers = anyvalue::Placeholder::from(array_of(any_integer())?);
///
/// assert_that!(vec![1, 2, 3], &integers);
/// assert_that!(Vec::<i32>::new(), &integers);
/// refute_that!(array![1, "a", 3], &integers);
///
/// assert!(matches!(array_of(42), Err(Error::InvalidArgument(_))));
/// # Ok::<(), Error>(())
/// ```
pub fn array_of(element: impl Into<Value>) -> Result<ArrayOf> {
    match element.into() {
        Value::Placeholder(element) => Ok(ArrayOf { element }),
        other => Err(Error::InvalidArgument(other.to_string())),
    }
}
