use std::fmt::{Debug, Formatter};
use std::ops::{BitXor, Not};
use std::rc::Rc;

use crate::matchers::{Composite, Negation};
use crate::{Coercions, DescribeOptions, Description, Matcher, Result, Value};

/// Shared handle to a type-erased [`Matcher`].
///
/// Cloning a placeholder does not copy the matcher: clones observe and
/// update the same history, which is what lets one uniqueness tracker be
/// used in several slots of an expected value.
#[derive(Clone)]
pub struct Placeholder(Rc<dyn Matcher>);

impl Placeholder {
    /// Wraps the given matcher.
    pub fn new(matcher: impl Matcher + 'static) -> Self {
        Self(Rc::new(matcher))
    }

    /// Returns whether both handles refer to the same matcher instance.
    pub fn ptr_eq(&self, other: &Placeholder) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const (),
            Rc::as_ptr(&other.0) as *const (),
        )
    }
}

impl Matcher for Placeholder {
    fn equals(&self, candidate: &Value) -> Result<bool> {
        self.0.equals(candidate)
    }

    fn describe_to(&self, options: &DescribeOptions, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.describe_to(options, f)
    }

    fn coercions(&self) -> Coercions {
        self.0.coercions()
    }
}

impl Debug for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", Description::new(self, &DescribeOptions::new()))
    }
}

impl From<&Placeholder> for Placeholder {
    fn from(placeholder: &Placeholder) -> Self {
        placeholder.clone()
    }
}

impl<R: Into<Placeholder>> BitXor<R> for Placeholder {
    type Output = Placeholder;

    /// Combines both placeholders into one that accepts values accepted by
    /// both. `a ^ b ^ c` nests as `(a ^ b) ^ c`.
    fn bitxor(self, right: R) -> Placeholder {
        Placeholder::new(Composite::new(self, right.into()))
    }
}

impl<R: Into<Placeholder>> BitXor<R> for &Placeholder {
    type Output = Placeholder;

    fn bitxor(self, right: R) -> Placeholder {
        self.clone() ^ right
    }
}

impl Not for Placeholder {
    type Output = Placeholder;

    fn not(self) -> Placeholder {
        Placeholder::new(Negation::new(self))
    }
}

impl Not for &Placeholder {
    type Output = Placeholder;

    fn not(self) -> Placeholder {
        !self.clone()
    }
}

/// Implements the conversions and operators shared by every matcher type:
/// `Into<Placeholder>`, `Into<Value>`, `^`, `!` and [`Debug`].
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_placeholder {
    ( $ty: ty ) => {
        impl std::convert::From<$ty> for $crate::Placeholder {
            fn from(matcher: $ty) -> Self {
                $crate::Placeholder::new(matcher)
            }
        }

        impl std::convert::From<$ty> for $crate::Value {
            fn from(matcher: $ty) -> Self {
                $crate::Value::Placeholder($crate::Placeholder::new(matcher))
            }
        }

        impl<R: std::convert::Into<$crate::Placeholder>> std::ops::BitXor<R> for $ty {
            type Output = $crate::Placeholder;

            fn bitxor(self, right: R) -> $crate::Placeholder {
                $crate::Placeholder::new(self) ^ right
            }
        }

        impl std::ops::Not for $ty {
            type Output = $crate::Placeholder;

            fn not(self) -> $crate::Placeholder {
                !$crate::Placeholder::new(self)
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::write!(
                    f,
                    "<{}>",
                    $crate::Description::new(self, &$crate::DescribeOptions::new())
                )
            }
        }
    };
}
