//! Built-in placeholders.
//!
//! Every constructor lives in this flat namespace; the submodules only group
//! them by the kind of value they accept.
use std::fmt::Formatter;

pub mod number;
pub mod seq;
pub mod stateful;
pub mod string;
pub mod time;
pub mod uri;

pub use number::{any_integer, any_number, even_number, odd_number};
pub use seq::{array_of, one_of, sorted_array};
pub use stateful::{any_unique, increasing};
pub use string::{any_string, string_matching, string_of_length, upcase_string};
pub use time::{any_date, any_date_string, any_datetime_string, any_time, any_time_string};
pub use uri::any_http_uri;

use crate::{Coercions, DescribeOptions, Description, Matcher, Placeholder, Result, Value};

/// A [`Matcher`] that accepts any value, including another placeholder.
///
/// It may stand in for both arrays and strings.
pub struct Anything;

impl Matcher for Anything {
    fn equals(&self, _candidate: &Value) -> Result<bool> {
        Ok(true)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(if options.is_negated {
            "is nothing"
        } else {
            "is anything"
        })
    }

    fn coercions(&self) -> Coercions {
        Coercions::ALL
    }
}

crate::__impl_placeholder!(Anything);

/// Returns a [`Matcher`] that accepts any value.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, Value, matchers::anything};
/// assert_that!(42, anything());
/// assert_that!(Value::Nil, anything());
/// assert_that!(anything(), anything());
/// ```
pub const fn anything() -> Anything {
    Anything
}

/// [`Matcher`] that accepts values accepted by both of its operands, built by
/// the `^` operator.
///
/// Both operands are always evaluated, left first, so that a stateful right
/// operand records the candidate even when the left one rejects it.
pub struct Composite {
    left: Placeholder,
    right: Placeholder,
}

impl Composite {
    /// Creates a new [`Composite`] matcher given both of its operands.
    pub const fn new(left: Placeholder, right: Placeholder) -> Self {
        Self { left, right }
    }
}

impl Matcher for Composite {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        let left = self.left.equals(candidate);
        let right = self.right.equals(candidate);

        tracing::trace!(?left, ?right, %candidate, "composite evaluated");

        Ok(left? & right?)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            Description::new(&self.left, options),
            if options.is_negated { "or" } else { "and" },
            Description::new(&self.right, options),
        )
    }

    /// A composite stands in for whatever its left operand stands in for.
    fn coercions(&self) -> Coercions {
        self.left.coercions()
    }
}

/// [`Matcher`] that negates its inner matcher, built by the `!` operator.
pub struct Negation {
    matcher_to_negate: Placeholder,
}

impl Negation {
    /// Creates a new [`Negation`] of the given matcher.
    pub const fn new(matcher_to_negate: Placeholder) -> Self {
        Self { matcher_to_negate }
    }
}

impl Matcher for Negation {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        Ok(!self.matcher_to_negate.equals(candidate)?)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.matcher_to_negate.describe_to(&options.negated(), f)
    }
}
