use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VeeError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("{0} {1}")]
    InvalidArgument(&'static str, Bound),

    #[error("not enough space ({0}m) to mount an inverted vee antenna")]
    NotEnoughSpace(i32),
}

/// The limit an argument violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Inclusive lower limit.
    AtLeast(f64),
    /// Inclusive upper limit.
    AtMost(f64),
    /// Exclusive lower limit.
    Above(f64),
    /// Exclusive upper limit.
    Below(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast(val) => write!(f, "must be at least {val}"),
            Bound::AtMost(val) => write!(f, "must be at most {val}"),
            Bound::Above(val) => write!(f, "must be greater than {val}"),
            Bound::Below(val) => write!(f, "must be less than {val}"),
        }
    }
}
