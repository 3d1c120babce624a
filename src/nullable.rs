//! The construction rule for [`Maybe`]
//!
//! A [`Nullable`] type knows whether a value of it is absent. Most types can
//! never be absent and always become [`Maybe::Present`]; these implement
//! [`NeverAbsent`]. Types such as [`Option`] and raw pointers have an absent
//! representation that collapses to [`Maybe::Absent`].
//!
//! References and smart pointers are absent when the value behind them is
//! absent. This is decided by [`NullableRef`], which inspects a value
//! through a reference. A `&Option<T>` therefore becomes either
//! `Maybe::Absent` or `Maybe::Present(&T)`.
//!
//! Types of other crates can opt in with [`never_absent!`](crate::never_absent).

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ffi::{OsStr, OsString},
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    path::{Path, PathBuf},
    ptr::NonNull,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

use log::trace;

use crate::maybe::Maybe;

/// A type that can be turned into a [`Maybe`]
///
/// Implementations must map every absent representation of the type to
/// [`Maybe::Absent`], so that [`Maybe::Present`] never holds an absent
/// value. Implementations for wrappers are recursive where the wrapped type
/// can be absent too, e.g. `Some(None)` is absent.
pub trait Nullable: Sized {
    /// The type held by the resulting [`Maybe`]
    type Value;

    fn into_maybe(self) -> Maybe<Self::Value>;
}

/// A type whose absence can be determined through a reference
///
/// This is the borrowed counterpart of [`Nullable`]. It allows
/// references, boxes and reference-counted pointers to delegate to the
/// value they point to.
pub trait NullableRef {
    /// The type borrowed by the resulting [`Maybe`]
    type Target: ?Sized;

    fn as_maybe(&self) -> Maybe<&Self::Target>;
}

/// A type that has no absent representation
///
/// Values of these types are always present. Outside of this crate,
/// `present` is the only direct way to construct a [`Maybe::Present`], and
/// it cannot be called on a type that can be absent:
///
/// ```compile_fail
/// use maybe::NeverAbsent;
///
/// let m = NeverAbsent::present(None::<i32>);
/// ```
pub trait NeverAbsent {
    fn present(self) -> Maybe<Self>
    where
        Self: Sized,
    {
        Maybe::Present(self)
    }
}

impl<T: NeverAbsent + ?Sized> NeverAbsent for &T {}
impl<T: NeverAbsent + ?Sized> NeverAbsent for &mut T {}

/// Wrap a value in a [`Maybe`], or return [`Maybe::Absent`] if the value
/// is absent
pub fn to_maybe<N: Nullable>(value: N) -> Maybe<N::Value> {
    value.into_maybe()
}

/// Mark types as [`NeverAbsent`] and make them usable in a [`Maybe`]
///
/// This implements [`NeverAbsent`], [`Nullable`] and [`NullableRef`] for
/// each given type.
///
/// ```
/// use maybe::{never_absent, to_maybe};
///
/// #[derive(Debug, PartialEq)]
/// struct User {
///     name: String,
/// }
///
/// never_absent!(User);
///
/// let user = to_maybe(User { name: "ann".into() });
/// assert_eq!(user.map(|u| u.name).value_or_default(), "ann");
/// ```
#[macro_export]
macro_rules! never_absent {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::NeverAbsent for $t {}

            impl $crate::Nullable for $t {
                type Value = Self;

                fn into_maybe(self) -> $crate::Maybe<Self> {
                    $crate::NeverAbsent::present(self)
                }
            }

            impl $crate::NullableRef for $t {
                type Target = Self;

                fn as_maybe(&self) -> $crate::Maybe<&Self> {
                    $crate::NeverAbsent::present(self)
                }
            }
        )*
    };
}

never_absent!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    OsString,
    PathBuf,
    Duration,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
);

macro_rules! never_absent_unsized {
    ($($t:ty),* $(,)?) => {
        $(
            impl NeverAbsent for $t {}

            impl NullableRef for $t {
                type Target = Self;

                fn as_maybe(&self) -> Maybe<&Self> {
                    Maybe::Present(self)
                }
            }
        )*
    };
}

never_absent_unsized!(str, OsStr, Path);

impl<T> NeverAbsent for [T] {}

impl<T> NullableRef for [T] {
    type Target = Self;

    fn as_maybe(&self) -> Maybe<&Self> {
        Maybe::Present(self)
    }
}

macro_rules! never_absent_generic {
    ($(impl<$($p:ident),*> for $t:ty;)*) => {
        $(
            impl<$($p),*> NeverAbsent for $t {}

            impl<$($p),*> Nullable for $t {
                type Value = Self;

                fn into_maybe(self) -> Maybe<Self::Value> {
                    self.present()
                }
            }

            impl<$($p),*> NullableRef for $t {
                type Target = Self;

                fn as_maybe(&self) -> Maybe<&Self> {
                    Maybe::Present(self)
                }
            }
        )*
    };
}

never_absent_generic! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for BTreeSet<T>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<T> for NonNull<T>;
    impl<A> for (A,);
    impl<A, B> for (A, B);
    impl<A, B, C> for (A, B, C);
    impl<A, B, C, D> for (A, B, C, D);
}

impl<T: Nullable> Nullable for Option<T> {
    type Value = T::Value;

    fn into_maybe(self) -> Maybe<Self::Value> {
        match self {
            Some(x) => x.into_maybe(),
            None => {
                trace!("collapsing `None` into absent");
                Maybe::Absent
            }
        }
    }
}

impl<T: NullableRef> NullableRef for Option<T> {
    type Target = T::Target;

    fn as_maybe(&self) -> Maybe<&Self::Target> {
        match self {
            Some(x) => x.as_maybe(),
            None => {
                trace!("collapsing `&None` into absent");
                Maybe::Absent
            }
        }
    }
}

impl<T> Nullable for Maybe<T> {
    type Value = T;

    fn into_maybe(self) -> Maybe<Self::Value> {
        self
    }
}

impl<T> NullableRef for Maybe<T> {
    type Target = T;

    fn as_maybe(&self) -> Maybe<&Self::Target> {
        self.as_ref()
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_maybe(self) -> Maybe<Self::Value> {
        (self as *mut T).into_maybe()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_maybe(self) -> Maybe<Self::Value> {
        match NonNull::new(self) {
            Some(p) => Maybe::Present(p),
            None => {
                trace!("collapsing null pointer into absent");
                Maybe::Absent
            }
        }
    }
}

impl<'a, T: NullableRef + ?Sized> Nullable for &'a T {
    type Value = &'a T::Target;

    fn into_maybe(self) -> Maybe<Self::Value> {
        T::as_maybe(self)
    }
}

impl<T: NullableRef + ?Sized> NullableRef for &T {
    type Target = T::Target;

    fn as_maybe(&self) -> Maybe<&Self::Target> {
        (**self).as_maybe()
    }
}

// Owning and mutable pointers are kept whole. They are present exactly
// when the value behind them is present.
macro_rules! pointer_nullable {
    ($(impl<$p:ident> for $t:ty;)*) => {
        $(
            impl<$p: NullableRef + ?Sized> Nullable for $t {
                type Value = Self;

                fn into_maybe(self) -> Maybe<Self::Value> {
                    if (*self).as_maybe().is_absent() {
                        trace!("collapsing pointer to absent value");
                        return Maybe::Absent;
                    }
                    Maybe::Present(self)
                }
            }
        )*
    };
}

pointer_nullable! {
    impl<T> for &mut T;
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
}

macro_rules! pointer_nullable_ref {
    ($(impl<$p:ident> for $t:ty;)*) => {
        $(
            impl<$p: NullableRef + ?Sized> NullableRef for $t {
                type Target = $p::Target;

                fn as_maybe(&self) -> Maybe<&Self::Target> {
                    (**self).as_maybe()
                }
            }
        )*
    };
}

pointer_nullable_ref! {
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
}

impl<B> Nullable for Cow<'_, B>
where
    B: NullableRef + ToOwned + ?Sized,
{
    type Value = Self;

    fn into_maybe(self) -> Maybe<Self::Value> {
        if (*self).as_maybe().is_absent() {
            trace!("collapsing `Cow` of absent value");
            return Maybe::Absent;
        }
        Maybe::Present(self)
    }
}
