//! Defines the [`Maybe`] type and its combinators

use std::fmt;

use log::trace;

use crate::{error::AbsentError, nullable::Nullable};


/// A value that is either present or absent
///
/// A [`Maybe`] is functionally close to an [`Option`], with one extra
/// guarantee: a `Present` value is never itself absent. Values are created
/// through [`to_maybe`](crate::to_maybe) or [`Nullable::into_maybe`], which
/// collapse absent representations such as `None` or a null pointer into
/// [`Maybe::Absent`]. The `Present` variant cannot be constructed outside
/// this crate, but it can be matched with `Maybe::Present { 0: x, .. }`.
///
/// Every combinator that produces a new value passes its result through
/// the same rule, so `Present(None)` can never be observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Maybe<T> {
    #[non_exhaustive]
    Present(T),
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    /// Returns `true` if there is no value
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns `true` if there is a value
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Returns the held value, or `default` if absent
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Present(x) => x,
            Maybe::Absent => default,
        }
    }

    /// Returns the held value, or the [`Default`] value of `T` if absent
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// Returns the held value, or computes a default if absent
    ///
    /// `f` is only called when the value is absent.
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Present(x) => x,
            Maybe::Absent => f(),
        }
    }

    /// Returns the held value, or an [`AbsentError`]
    pub fn value(self) -> Result<T, AbsentError> {
        match self {
            Maybe::Present(x) => Ok(x),
            Maybe::Absent => Err(AbsentError),
        }
    }

    /// Converts into an [`Option`], `Absent` becoming `None`
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Borrow the held value
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(x) => Maybe::Present(x),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transform the held value
    ///
    /// The result of `f` is passed back through [`Nullable::into_maybe`], so
    /// if `f` returns an absent value (e.g. `None`), the result is
    /// [`Maybe::Absent`]. `f` is not called when `self` is absent.
    pub fn map<N, F>(self, f: F) -> Maybe<N::Value>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self {
            Maybe::Present(x) => f(x).into_maybe(),
            Maybe::Absent => {
                trace!("map: absent, skipping transform");
                Maybe::Absent
            }
        }
    }

    /// Keep the value only if `pred` holds for it
    ///
    /// The kept value is returned as is. `pred` is not called when `self`
    /// is absent.
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(ref x) => {
                if pred(x) {
                    self
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => {
                trace!("filter: absent, skipping predicate");
                Maybe::Absent
            }
        }
    }

    /// Keep the value only if `pred` does _not_ hold for it
    ///
    /// This is the complement of [`Maybe::filter`].
    pub fn filter_not<P>(self, pred: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(ref x) => {
                if pred(x) {
                    Maybe::Absent
                } else {
                    self
                }
            }
            Maybe::Absent => {
                trace!("filter_not: absent, skipping predicate");
                Maybe::Absent
            }
        }
    }

    /// Chain a computation that may itself produce nothing
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(x) => f(x),
            Maybe::Absent => {
                trace!("bind: absent, skipping continuation");
                Maybe::Absent
            }
        }
    }

    /// Chain a dependent optional value and combine both values
    ///
    /// `to_b` receives a reference to the held value and produces a second
    /// value, which goes through [`Nullable::into_maybe`]. If both are
    /// present, `combine` receives both by value and its result is wrapped
    /// the same way.
    ///
    /// Evaluation stops at the first absent value: `to_b` is not called if
    /// `self` is absent and `combine` is not called if either is absent.
    pub fn bind_combine<B, C, FB, FC>(
        self,
        to_b: FB,
        combine: FC,
    ) -> Maybe<C::Value>
    where
        B: Nullable,
        C: Nullable,
        FB: FnOnce(&T) -> B,
        FC: FnOnce(T, B::Value) -> C,
    {
        let Maybe::Present(a) = self else {
            trace!("bind_combine: first value absent");
            return Maybe::Absent;
        };

        let Maybe::Present(b) = to_b(&a).into_maybe() else {
            trace!("bind_combine: second value absent");
            return Maybe::Absent;
        };

        combine(a, b).into_maybe()
    }
}

impl<T: Nullable> From<Option<T>> for Maybe<T::Value> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(x) => Some(x),
            Maybe::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(x) => fmt::Display::fmt(x, f),
            Maybe::Absent => f.write_str("absent"),
        }
    }
}
