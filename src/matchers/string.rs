use regex::Regex;

use crate::{self as anyvalue, matcher, Coercions, Value};

/// Returns a [`Matcher`](crate::Matcher) that accepts strings.
///
/// It may stand in for a string, so comparisons with a concrete string on
/// either side reach it.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, Value, matchers::any_string};
/// assert_that!("foo", any_string());
/// assert_eq!(Value::from("foo").matches(&any_string().into()), Ok(true));
///
/// refute_that!(42, any_string());
/// ```
#[matcher(expected = ("{} string", switch("is a", "is not a")), coerces = Coercions::TEXT)]
pub fn any_string(value: &Value) -> bool {
    value.as_str().is_some()
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings of exactly
/// `expected_length` characters.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::string_of_length};
/// assert_that!("foo", string_of_length(3));
/// assert_that!("été", string_of_length(3));
///
/// refute_that!("foo", string_of_length(5));
/// refute_that!(123, string_of_length(3));
/// ```
#[matcher(expected = ("{} string of length {}", switch("is a", "is not a"), expected_length))]
pub fn string_of_length(expected_length: usize, value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |s| s.chars().count() == *expected_length)
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings in which
/// `pattern` finds a match.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, Placeholder, matchers::string_matching};
/// # use regex::Regex;
/// let foo = Placeholder::from(string_matching(Regex::new("foo").unwrap()));
///
/// assert_that!("foo", &foo);
/// assert_that!("foo foo", &foo);
///
/// refute_that!("bar", &foo);
/// ```
#[matcher(expected = ("{} string matching /{}/", switch("is a", "is not a"), pattern))]
pub fn string_matching(pattern: Regex, value: &Value) -> bool {
    value.as_str().map_or(false, |s| pattern.is_match(s))
}

/// Returns a [`Matcher`](crate::Matcher) that accepts strings equal to their
/// own uppercase form.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::upcase_string};
/// assert_that!("FOO", upcase_string());
/// assert_that!("NO. 5", upcase_string());
///
/// refute_that!("Foo", upcase_string());
/// ```
#[matcher(expected = ("{} upcase string", switch("is an", "is not an")))]
pub fn upcase_string(value: &Value) -> bool {
    value.as_str().map_or(false, |s| s.to_uppercase() == s)
}
