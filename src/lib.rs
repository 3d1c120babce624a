//! Composable optional values
//!
//! A [`Maybe<T>`] holds either exactly one value or nothing. Unlike a plain
//! [`Option`], a present [`Maybe`] never holds an absent value: values enter
//! through [`to_maybe`], which collapses `None`, null pointers, references
//! to `None` and nested absent values into [`Maybe::Absent`], and every
//! combinator re-wraps its result the same way.
//!
//! ```
//! use maybe::to_maybe;
//!
//! let res = to_maybe("a")
//!     .filter(|x| x.len() == 1)
//!     .bind_combine(|_| to_maybe("b"), |a, b| format!("{a}{b}"));
//! assert_eq!(res.value_or_default(), "ab");
//!
//! let res = to_maybe(None::<&str>)
//!     .filter(|x| x.len() == 1)
//!     .bind_combine(|_| to_maybe("b"), |a, b| format!("{a}{b}"));
//! assert!(res.is_absent());
//! ```

mod error;
mod macros;
mod maybe;
mod nullable;

pub use error::AbsentError;
pub use maybe::Maybe;
pub use nullable::{to_maybe, NeverAbsent, Nullable, NullableRef};
