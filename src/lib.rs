//! Placeholder values for equality-based assertions.
//!
//! A placeholder stands in for an expected value whose exact content a test
//! does not care about (a generated identifier, a timestamp, ...), while
//! still checking its shape.
//!
//! ### Example
//! ```
//! # use anyvalue::{array, assert_that, Scope, matchers::{any_time, string_of_length}};
//! # use chrono::Utc;
//! let scope = Scope::new();
//! let id = scope.any_unique() ^ string_of_length(36);
//!
//! let people = array![
//!     array!["0a45f5b4-52b6-4bd4-b5de-3fdf1e8c8b7e", Utc::now(), "Alice"],
//!     array!["5c3e9a9e-3d4f-4ab5-9e1d-3f5d6e8b2c11", Utc::now(), "Bob"],
//! ];
//!
//! assert_that!(
//!     people,
//!     array![
//!         array![&id, any_time(), "Alice"],
//!         array![&id, any_time(), "Bob"],
//!     ]);
//! ```
//!
//! Stateful placeholders ([`Scope::any_unique`], [`Scope::increasing`]) keep
//! their history behind a shared [`Placeholder`] handle. Handles are neither
//! [`Send`] nor [`Sync`]: a tracker belongs to the test that created it.
use std::fmt::{Display, Formatter};

mod error;
pub mod matchers;
mod placeholder;
mod scope;
mod value;

pub use error::{Error, Result};
pub use placeholder::Placeholder;
pub use scope::Scope;
pub use value::{Value, ValueDescription};

/// Transforms a predicate over a [`Value`] into a [`Matcher`].
///
/// The last parameter is the candidate; every other parameter becomes a field
/// of the generated `{Name}Matcher` struct. The function itself becomes the
/// constructor of that struct.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, matcher, refute_that, Value};
/// #[matcher(expected = ("{} a string starting with {:?}", switch("is", "is not"), prefix))]
/// fn starting_with(prefix: &'static str, value: &Value) -> bool {
///     value.as_str().map_or(false, |s| s.starts_with(prefix))
/// }
///
/// assert_that!("NBA", starting_with("N"));
/// refute_that!("FBI", starting_with("N"));
/// ```
pub use anyvalue_derive::matcher;

/// A placeholder which decides whether a candidate [`Value`] satisfies it.
///
/// The assertion layer must call [`Matcher::equals`] with the matcher as
/// receiver and the real value as argument; see [`Value::matches`].
pub trait Matcher {
    /// Returns whether `candidate` satisfies this matcher.
    ///
    /// Stateful matchers record `candidate` as a side effect. An [`Error`] is
    /// returned when the candidate cannot be evaluated at all, which is
    /// distinct from `Ok(false)`.
    fn equals(&self, candidate: &Value) -> Result<bool>;

    /// Describes what kind of value is expected by this matcher.
    ///
    /// Messages should begin with a verb such as "is" or "must".
    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result;

    /// The shapes this matcher may be coerced to when a concrete value is on
    /// the left-hand side of a comparison.
    fn coercions(&self) -> Coercions {
        Coercions::NONE
    }

    /// Returns the positive description of this matcher.
    fn describe(&self) -> String {
        Description::new(self, &DescribeOptions::new()).to_string()
    }
}

impl<'m, M: Matcher + ?Sized> Matcher for &'m M {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        (**self).equals(candidate)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        (**self).describe_to(options, f)
    }

    fn coercions(&self) -> Coercions {
        (**self).coercions()
    }
}

/// [`Display`] adapter over [`Matcher::describe_to`].
pub struct Description<'a, M: ?Sized> {
    matcher: &'a M,
    options: &'a DescribeOptions,
}

impl<'a, M: Matcher + ?Sized> Description<'a, M> {
    /// Creates a new description given its matcher and options.
    pub fn new(matcher: &'a M, options: &'a DescribeOptions) -> Self {
        Self { matcher, options }
    }
}

impl<'a, M: Matcher + ?Sized> Display for Description<'a, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.matcher.describe_to(self.options, f)
    }
}

/// Object given to [`Matcher::describe_to`].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct DescribeOptions {
    /// Whether the description should be negated.
    pub is_negated: bool,
}

impl DescribeOptions {
    /// Returns a new [`DescribeOptions`].
    pub const fn new() -> Self {
        Self { is_negated: false }
    }

    /// Returns a new negated [`DescribeOptions`].
    pub const fn negated(&self) -> Self {
        Self {
            is_negated: !self.is_negated,
        }
    }
}

/// Shapes a [`Matcher`] may stand in for when it appears on the right-hand
/// side of a comparison against a concrete value.
///
/// Comparing `[1, 2, 3]` against [`sorted_array`](matchers::sorted_array)
/// only consults the matcher because it advertises [`Coercions::SEQUENCE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coercions {
    /// The matcher may stand in for an array.
    pub sequence: bool,
    /// The matcher may stand in for a string.
    pub text: bool,
}

impl Coercions {
    pub const NONE: Self = Self {
        sequence: false,
        text: false,
    };
    pub const SEQUENCE: Self = Self {
        sequence: true,
        text: false,
    };
    pub const TEXT: Self = Self {
        sequence: false,
        text: true,
    };
    pub const ALL: Self = Self {
        sequence: true,
        text: true,
    };
}

/// Asserts that `actual` is accepted by `expected`.
///
/// Panics with a distinct message if the comparison could not be evaluated
/// (see [`Error`]).
pub fn assert_that(actual: &Value, expected: &Value) {
    match expected.matches(actual) {
        Ok(true) => (),
        Ok(false) => {
            tracing::debug!(%expected, %actual, "assertion failed");

            panic!(
                "assertion failed:\n\texpected: {}\n\tactual: {}",
                expected.describe(&DescribeOptions::new()),
                actual,
            )
        }
        Err(error) => panic!(
            "assertion could not be evaluated: {error}\n\texpected: {}\n\tactual: {}",
            expected.describe(&DescribeOptions::new()),
            actual,
        ),
    }
}

/// Asserts that `actual` is rejected by `expected`.
pub fn refute_that(actual: &Value, expected: &Value) {
    let options = DescribeOptions::new().negated();

    match expected.matches(actual) {
        Ok(false) => (),
        Ok(true) => {
            tracing::debug!(%expected, %actual, "refutation failed");

            panic!(
                "refutation failed:\n\texpected: {}\n\tactual: {}",
                expected.describe(&options),
                actual,
            )
        }
        Err(error) => panic!(
            "refutation could not be evaluated: {error}\n\texpected: {}\n\tactual: {}",
            expected.describe(&options),
            actual,
        ),
    }
}

/// Asserts that the given value is accepted by the expected value, which may
/// be or contain placeholders.
///
/// ```
/// # use anyvalue::{assert_that, matchers::any_integer};
/// assert_that!(42, any_integer());
/// ```
///
/// ```should_panic
/// # use anyvalue::{assert_that, matchers::any_integer};
/// assert_that!("foo", any_integer());  // fails
/// ```
#[macro_export]
macro_rules! assert_that {
    ( $value: expr, $expected: expr ) => {
        $crate::assert_that(&$crate::Value::from($value), &$crate::Value::from($expected))
    };
}

/// Asserts that the given value is rejected by the expected value.
///
/// ```
/// # use anyvalue::{refute_that, matchers::any_integer};
/// refute_that!(1.0, any_integer());
/// ```
///
/// ```should_panic
/// # use anyvalue::{refute_that, matchers::any_integer};
/// refute_that!(1, any_integer());  // fails
/// ```
#[macro_export]
macro_rules! refute_that {
    ( $value: expr, $expected: expr ) => {
        $crate::refute_that(&$crate::Value::from($value), &$crate::Value::from($expected))
    };
}
