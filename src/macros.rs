/// Comprehension syntax over [`Maybe`](crate::Maybe) values
///
/// A comprehension is a sequence of steps separated by `;`, ending in a
/// `yield`:
///
///  - `x <- expr;` binds the value of `expr` to `x`, or stops if `expr` is
///    absent. `expr` can be anything [`Nullable`](crate::Nullable).
///  - `if cond;` stops unless `cond` holds.
///  - `yield expr` produces the result, which is wrapped with
///    [`to_maybe`](crate::to_maybe).
///
/// Each step is evaluated at most once and only if every step before it
/// was present.
///
/// ```
/// use maybe::maybe;
///
/// let res = maybe! {
///     val <- "a";
///     if !val.trim().is_empty();
///     if val.len() == 1;
///     val2 <- "b";
///     yield format!("{val}{val2}")
/// };
/// assert_eq!(res.value_or_default(), "ab");
/// ```
#[macro_export]
macro_rules! maybe {
    (yield $e:expr $(;)?) => {
        $crate::to_maybe($e)
    };
    (if $c:expr; $($rest:tt)+) => {
        if $c {
            $crate::maybe!($($rest)+)
        } else {
            $crate::Maybe::Absent
        }
    };
    ($x:ident <- $e:expr; yield $y:expr $(;)?) => {
        $crate::to_maybe($e).map(|$x| $y)
    };
    ($x:ident <- $e:expr; $($rest:tt)+) => {
        $crate::to_maybe($e).bind(|$x| $crate::maybe!($($rest)+))
    };
}
