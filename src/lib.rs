//! # The either crate
//! This crate contains the Either type and its functional capabilities
//!
//! An Either holds exactly one of two values. By convention the left value
//! represents a failure and the right value a success, which makes Either a
//! close relative of Result that can take part in functional composition.
//!
//! ## Design
//! The Either type itself lives in the `either` module. Its capabilities are
//! split over three modules, each built on the previous one:
//!
//! * `functor` lifts a plain function over the right value (`map`).
//! * `applicative` lifts plain values into an Either (`pure`) and applies a
//!   wrapped function to a wrapped value (`apply`).
//! * `monad` sequences computations that themselves produce an Either (`bind`).
//!
//! The `either_trans` module layers the same capabilities over a function of
//! an environment, so a chain of fallible steps can be built once and run
//! against many inputs.
//!
//! All three pass a left value through untouched and never call the supplied
//! function when they do, so a failure anywhere in a chain short-circuits the
//! rest of it. Each capability is a trait resolved at compile time, with a free
//! function alongside it for callers that prefer prefix notation.
//!
//! Accessing the right value of a Left is a programming error. It is reported
//! through this crate's Error type (or a panic, for the Deref shortcut) and
//! never through the left side, which is reserved for data.

#[macro_use]
extern crate log;

pub mod either;
pub mod functor;
pub mod applicative;
pub mod monad;
pub mod either_trans;

use std::fmt;
use std::error;
use std::result;

pub use crate::either::{Either, make_left, make_right};
pub use crate::functor::{Functor, map};
pub use crate::applicative::{Applicative, Apply, pure, apply, lift2};
pub use crate::monad::{Monad, bind};
pub use crate::either_trans::EitherT;

/// Represents either a value or a misuse error
pub type Result<T> = result::Result<T, Error>;

/// Represents a type of error for the either error type
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value was accessed on the side the Either does not hold
    Logic
}

/// Represents an error caused by misusing an Either
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// An enum that represents the kind of error this is
    pub kind: ErrorKind,
    /// A human-readable description of the error
    pub desc: &'static str,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error { ref kind, ref desc } => write!(fmt, "Either error of kind {:?}: {}", kind, desc)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl error::Error for Error {}
