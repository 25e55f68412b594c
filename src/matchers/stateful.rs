//! Placeholders whose verdict depends on the values they have already seen.
//!
//! Both trackers are returned as [`Placeholder`]s: every clone of a handle
//! shares one history, and constructing a new tracker starts a new one. Use
//! [`Scope`](crate::Scope) to get the same tracker back on every call.
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt::Formatter;

use crate::value::ValueList;
use crate::{DescribeOptions, Error, Matcher, Placeholder, Result, Value};

/// Runs `describe` unless the tracker owning `describing` is already being
/// described further up the stack, which happens once a tracker has recorded
/// itself. The nested occurrence is rendered as `recursive` instead.
fn describe_once(
    describing: &Cell<bool>,
    f: &mut Formatter<'_>,
    recursive: &str,
    describe: impl FnOnce(&mut Formatter<'_>) -> std::fmt::Result,
) -> std::fmt::Result {
    if describing.replace(true) {
        return f.write_str(recursive);
    }

    let result = describe(f);

    describing.set(false);
    result
}

/// [`Matcher`] that accepts each value only the first time it sees it.
#[derive(Default)]
pub struct AnyUnique {
    seen: RefCell<Vec<Value>>,
    recorded_last: Cell<bool>,
    describing: Cell<bool>,
}

impl Matcher for AnyUnique {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        let is_new = {
            let mut seen = self.seen.borrow_mut();
            let is_new = !seen.contains(candidate);

            if is_new {
                seen.push(candidate.clone());
            }

            is_new
        };

        self.recorded_last.set(is_new);

        // `candidate` may render this very tracker, so `seen` must be released.
        if !is_new {
            tracing::trace!(%candidate, "value already seen");
        }

        Ok(is_new)
    }

    /// Describes the values seen before the last evaluation.
    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        let recursive = if options.is_negated {
            "is a value seen before"
        } else {
            "is a value not seen before"
        };

        describe_once(&self.describing, f, recursive, |f| {
            let seen = self.seen.borrow();
            let before_last = &seen[..seen.len() - usize::from(self.recorded_last.get())];

            write!(
                f,
                "{} {}",
                if options.is_negated {
                    "is one of"
                } else {
                    "is none of"
                },
                ValueList(before_last),
            )
        })
    }
}

/// Returns a new [`Matcher`] that accepts any value it has not seen before,
/// and remembers it.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_unique};
/// let unique = any_unique();
///
/// assert_that!(1, &unique);
/// assert_that!(2, &unique);
/// refute_that!(1, &unique);
/// ```
pub fn any_unique() -> Placeholder {
    Placeholder::new(AnyUnique::default())
}

/// [`Matcher`] that accepts values strictly greater than the last one it saw.
///
/// The baseline always moves to the latest comparable candidate, even a
/// rejected one: after `3`, the sequence `1, 2` is rejected then accepted.
/// This is a permissive check that reports each step back, not a strict
/// monotonicity check over the whole history.
#[derive(Default)]
pub struct Increasing {
    last: RefCell<Option<Value>>,
    previous: RefCell<Option<Value>>,
    describing: Cell<bool>,
}

impl Matcher for Increasing {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        let last = self.last.borrow().clone();

        *self.previous.borrow_mut() = last.clone();

        let is_greater = match &last {
            None | Some(Value::Nil) => true,
            Some(last) => match candidate.partial_cmp(last) {
                Some(ordering) => ordering == Ordering::Greater,
                None => return Err(Error::incomparable(candidate, last)),
            },
        };

        tracing::trace!(%candidate, ?last, is_greater, "baseline advanced");
        *self.last.borrow_mut() = Some(candidate.clone());

        Ok(is_greater)
    }

    /// Describes the baseline as it was before the last evaluation.
    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        let recursive = if options.is_negated {
            "is not greater than the previous value"
        } else {
            "is greater than the previous value"
        };

        describe_once(&self.describing, f, recursive, |f| {
            match (&*self.previous.borrow(), options.is_negated) {
                (None | Some(Value::Nil), false) => f.write_str("is anything (no previous value)"),
                (None | Some(Value::Nil), true) => f.write_str("is nothing (no previous value)"),
                (Some(previous), false) => write!(f, "is greater than {previous}"),
                (Some(previous), true) => write!(f, "is lower than or equal to {previous}"),
            }
        })
    }
}

/// Returns a new [`Matcher`] that accepts any first value, then values
/// greater than the previous one. A `nil` baseline counts as no baseline.
///
/// Values that cannot be ordered against the previous one are reported as an
/// [`Error::Incomparable`], and leave the baseline unchanged.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::increasing};
/// let increasing = increasing();
///
/// assert_that!(1, &increasing);
/// assert_that!(2, &increasing);
/// refute_that!(1, &increasing);
/// assert_that!(2, &increasing);
/// ```
pub fn increasing() -> Placeholder {
    Placeholder::new(Increasing::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{any_string, string_of_length};
    use crate::{assert_that, refute_that};

    fn verdicts(matcher: &Placeholder, values: &[Value]) -> Vec<bool> {
        values
            .iter()
            .map(|value| matcher.equals(value).unwrap())
            .collect()
    }

    #[test]
    fn unique_rejects_repeated_values() {
        let unique = any_unique();

        assert_eq!(
            verdicts(&unique, &[1.into(), 1.into(), 2.into(), "1".into()]),
            [true, false, true, true]
        );
    }

    #[test]
    fn unique_describes_values_seen_before_last_evaluation() {
        let unique = any_unique();

        assert_eq!(unique.describe(), "is none of []");

        unique.equals(&1.into()).unwrap();
        unique.equals(&2.into()).unwrap();
        assert_eq!(unique.describe(), "is none of [1]");

        unique.equals(&2.into()).unwrap();
        assert_eq!(unique.describe(), "is none of [1, 2]");
    }

    #[test]
    fn unique_composed_with_a_type_check() {
        let unique_string = any_unique() ^ any_string();

        assert_that!("a", &unique_string);
        assert_that!("b", &unique_string);
        assert_that!("c", &unique_string);
        refute_that!("c", &unique_string);
        refute_that!(42, &unique_string);
    }

    #[test]
    fn unique_uuid_like_strings() {
        let uuid = any_unique() ^ string_of_length(36);
        let first = "7f8e7d1c-5b2a-4c3d-9e8f-0a1b2c3d4e5f";
        let second = "0b8d8c2e-1f3a-4b5c-8d7e-6f5a4b3c2d1e";

        assert_that!(first, &uuid);
        assert_that!(second, &uuid);
        refute_that!(first, &uuid);
        refute_that!("too short", &uuid);
    }

    #[test]
    fn increasing_moves_its_baseline_on_failure() {
        let increasing = increasing();

        assert_eq!(
            verdicts(
                &increasing,
                &[1.into(), 2.into(), 3.into(), 1.into(), 2.into(), 3.into()]
            ),
            [true, true, true, false, true, true]
        );
    }

    #[test]
    fn increasing_rejects_equal_values() {
        let increasing = increasing();

        assert_eq!(
            verdicts(&increasing, &["a".into(), "a".into(), "b".into()]),
            [true, false, true]
        );
    }

    #[test]
    fn increasing_describes_the_previous_baseline() {
        let increasing = increasing();

        assert_eq!(increasing.describe(), "is anything (no previous value)");

        increasing.equals(&3.into()).unwrap();
        increasing.equals(&1.into()).unwrap();
        assert_eq!(increasing.describe(), "is greater than 3");
        assert_eq!(
            crate::Description::new(&increasing, &DescribeOptions::new().negated()).to_string(),
            "is lower than or equal to 3"
        );
    }

    #[test]
    fn increasing_reports_incomparable_values() {
        let increasing = increasing();

        increasing.equals(&1.into()).unwrap();

        assert_eq!(
            increasing.equals(&"a".into()),
            Err(Error::Incomparable {
                candidate: r#"string "a""#.to_owned(),
                previous: "integer 1".to_owned(),
            })
        );

        // The baseline is left untouched.
        assert_eq!(increasing.equals(&2.into()), Ok(true));
    }

    #[test]
    fn unique_can_see_itself_while_tracing() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let unique = any_unique();
            let itself = Value::from(&unique);

            assert_eq!(unique.equals(&itself), Ok(true));
            assert_eq!(unique.equals(&itself), Ok(false));
            assert_eq!(unique.describe(), "is none of [<is a value not seen before>]");
        });
    }

    #[test]
    fn increasing_can_see_itself_while_tracing() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let increasing = increasing();
            let itself = Value::from(&increasing);

            assert_eq!(increasing.equals(&itself), Ok(true));
            assert_eq!(increasing.equals(&itself), Ok(false));
            assert_eq!(
                increasing.describe(),
                "is greater than <is greater than the previous value>"
            );
        });
    }

    #[test]
    fn increasing_treats_a_nil_baseline_as_missing() {
        let increasing = increasing();

        assert_eq!(increasing.equals(&Value::Nil), Ok(true));
        assert_eq!(increasing.describe(), "is anything (no previous value)");
        assert_eq!(increasing.equals(&1.into()), Ok(true));
        assert_eq!(increasing.equals(&0.into()), Ok(false));
    }
}
