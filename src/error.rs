//! Error returned when a value is required but absent

/// The value of a [`Maybe`](crate::Maybe) was required, but it was absent
///
/// This error carries no further information: absence has no reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsentError;

impl std::fmt::Display for AbsentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "value is absent")
    }
}

impl std::error::Error for AbsentError {}
