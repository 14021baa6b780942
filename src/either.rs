//! # The either module
//! This module contains the Either type and implementations
//!
//! By convention the left side holds a failure and the right side holds
//! a success. The functor, applicative and monad capabilities in the
//! sibling modules all operate on the right side and pass a left through
//! untouched.

use std::ops::{Deref, DerefMut};
use crate::{Error, ErrorKind, Result};

/// Error reported when the right value of a Left is accessed
const LEFT_ACCESS: Error = Error {
    kind: ErrorKind::Logic,
    desc: "Attempted to access the right value of a Left",
};

/// Either is a type that represents either of two types
///
/// It is split up into a right and a left value, similar
/// to how the Result type functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R)
}

/// Creates an Either holding a left value
///
/// The right type is left open, so it is usually named at the call
/// site: `make_left::<String, _>(10)`.
pub fn make_left<R, L>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates an Either holding a right value
pub fn make_right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl <L, R> Either<L, R> {

    /// Returns true if the Either contains an element of type L
    pub fn is_left(&self) -> bool {
        match *self {
            Either::Left(_) => true,
            Either::Right(_) => false
        }
    }

    /// Returns true if the Either contains an element of type R
    pub fn is_right(&self) -> bool {
        match *self {
            Either::Left(_) => false,
            Either::Right(_) => true
        }
    }

    /// Converts the Either into an Option, returning Some(L) or None
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(val) => Some(val),
            Either::Right(_) => None
        }
    }

    /// Converts the Either into an Option, returning Some(R) or None
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(val) => Some(val)
        }
    }

    /// Returns the left value, panicking if the Either holds a Right
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(val) => val,
            Either::Right(_) => panic!("unwrap_left but contained Right")
        }
    }

    /// Returns the right value, panicking if the Either holds a Left
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("unwrap_right but contained Left"),
            Either::Right(val) => val
        }
    }

    /// Borrows the contents of the Either
    pub fn as_ref(&self) -> Either<&L, &R> {
        match *self {
            Either::Left(ref val) => Either::Left(val),
            Either::Right(ref val) => Either::Right(val)
        }
    }

    /// Mutably borrows the contents of the Either
    ///
    /// Matching on the result allows the active value to be
    /// modified in place, whichever side it is on.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match *self {
            Either::Left(ref mut val) => Either::Left(val),
            Either::Right(ref mut val) => Either::Right(val)
        }
    }

    /// Folds the Either into a single value
    ///
    /// Exactly one of the two closures is called, depending on
    /// the side the Either is on.
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
        where F: FnOnce(L) -> T, G: FnOnce(R) -> T {
        match self {
            Either::Left(val) => on_left(val),
            Either::Right(val) => on_right(val)
        }
    }

    /// Swaps the left and right sides
    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(val) => Either::Right(val),
            Either::Right(val) => Either::Left(val)
        }
    }

    /// Returns the left value, or the given default if the Either holds a Right
    pub fn left_or(self, default: L) -> L {
        match self {
            Either::Left(val) => val,
            Either::Right(_) => default
        }
    }

    /// Returns the right value, or the given default if the Either holds a Left
    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(val) => val
        }
    }

    /// Returns the right value, or computes one from the left value
    pub fn right_or_else<F>(self, op: F) -> R
        where F: FnOnce(L) -> R {
        match self {
            Either::Left(val) => op(val),
            Either::Right(val) => val
        }
    }

    /// Maps the left value, leaving a right value untouched
    ///
    /// This is the mirror image of `Functor::fmap` and is mostly useful
    /// for translating one error type into another.
    pub fn map_left<M, F>(self, op: F) -> Either<M, R>
        where F: FnOnce(L) -> M {
        match self {
            Either::Left(val) => Either::Left(op(val)),
            Either::Right(val) => Either::Right(val)
        }
    }

    /// Borrows the right value, failing if the Either holds a Left
    ///
    /// Accessing the right value of a Left is a programming error rather
    /// than a data error, so it is reported through the crate's Error type
    /// instead of through the left side.
    pub fn value(&self) -> Result<&R> {
        match *self {
            Either::Left(_) => {
                error!("{}", LEFT_ACCESS);
                Err(LEFT_ACCESS)
            },
            Either::Right(ref val) => Ok(val)
        }
    }

    /// Mutably borrows the right value, failing if the Either holds a Left
    pub fn value_mut(&mut self) -> Result<&mut R> {
        match *self {
            Either::Left(_) => {
                error!("{}", LEFT_ACCESS);
                Err(LEFT_ACCESS)
            },
            Either::Right(ref mut val) => Ok(val)
        }
    }

    /// Converts the Either into a Result, mapping Right to Ok and Left to Err
    pub fn into_result(self) -> std::result::Result<R, L> {
        match self {
            Either::Left(val) => Err(val),
            Either::Right(val) => Ok(val)
        }
    }
}

impl <L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Either<L, R> {
        match result {
            Ok(val) => Either::Right(val),
            Err(err) => Either::Left(err)
        }
    }
}

/// Forwards to the right value, so its methods can be called on the Either
///
/// Panics if the Either holds a Left. Use `value` to check first.
impl <L, R> Deref for Either<L, R> {
    type Target = R;

    fn deref(&self) -> &R {
        match self.value() {
            Ok(val) => val,
            Err(err) => panic!("{}", err.desc)
        }
    }
}

impl <L, R> DerefMut for Either<L, R> {
    fn deref_mut(&mut self) -> &mut R {
        match self.value_mut() {
            Ok(val) => val,
            Err(err) => panic!("{}", err.desc)
        }
    }
}
