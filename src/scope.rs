use once_cell::unsync::OnceCell;

use crate::matchers;
use crate::Placeholder;

/// Owner of the stateful placeholders of one test.
///
/// [`Scope::any_unique`] and [`Scope::increasing`] build their tracker on the
/// first call and return that same tracker afterwards, so consecutive
/// assertions accumulate history without the test threading the tracker
/// through by hand. Dropping the scope drops the history.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, Scope};
/// let scope = Scope::new();
///
/// assert_that!(1, scope.any_unique());
/// assert_that!(2, scope.any_unique());
/// refute_that!(1, scope.any_unique());
///
/// // A new scope starts from scratch.
/// assert_that!(1, Scope::new().any_unique());
/// ```
#[derive(Default)]
pub struct Scope {
    any_unique: OnceCell<Placeholder>,
    increasing: OnceCell<Placeholder>,
}

impl Scope {
    /// Returns a new, empty [`Scope`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the uniqueness tracker of this scope.
    ///
    /// See [`matchers::any_unique`].
    pub fn any_unique(&self) -> Placeholder {
        self.any_unique.get_or_init(matchers::any_unique).clone()
    }

    /// Returns the increasing-value tracker of this scope.
    ///
    /// See [`matchers::increasing`].
    ///
    /// ```
    /// # use anyvalue::{assert_that, refute_that, Scope};
    /// let scope = Scope::new();
    ///
    /// assert_that!(1, scope.increasing());
    /// assert_that!(3, scope.increasing());
    /// refute_that!(2, scope.increasing());
    /// ```
    pub fn increasing(&self) -> Placeholder {
        self.increasing.get_or_init(matchers::increasing).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trackers_are_memoized_per_scope() {
        let scope = Scope::new();

        assert!(scope.any_unique().ptr_eq(&scope.any_unique()));
        assert!(scope.increasing().ptr_eq(&scope.increasing()));
        assert!(!scope.any_unique().ptr_eq(&Scope::new().any_unique()));
    }
}
