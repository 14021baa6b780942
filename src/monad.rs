//! # The monad module
//! This module contains the Monad trait and its implementation for Either
//!
//! Binding is the backbone of error propagation with Either. Each step in a
//! chain of binds receives the right value of the previous step, and the
//! first Left ends the chain: no function after it is called, and its left
//! value becomes the result of the whole chain.

use crate::either::Either;
use crate::functor::Functor;
use crate::applicative::Applicative;

/// Provides the ability to sequence computations that produce a structure
///
/// Implementations must obey the monad laws: binding a lifted value to `f`
/// is the same as calling `f`, binding to `pure` changes nothing, and
/// binding is associative.
pub trait Monad<B>: Functor<B> + Applicative {
    /// Passes the contained value to a function producing a new structure
    fn bind<F>(self, f: F) -> Self::Mapped
        where F: FnOnce(<Self as Functor<B>>::Unwrapped) -> Self::Mapped;
}

/// Either is a monad in its right value
///
/// Binding a Right calls the function and returns its result, which may be
/// a Left or a Right. Binding a Left returns the same left value without
/// calling the function.
impl <L, R, B> Monad<B> for Either<L, R> {
    fn bind<F>(self, f: F) -> Either<L, B>
        where F: FnOnce(R) -> Either<L, B> {
        match self {
            Either::Left(err) => {
                trace!("Bind short-circuited on a Left");
                Either::Left(err)
            },
            Either::Right(val) => f(val)
        }
    }
}

/// Binds a monad to a function
pub fn bind<T, B, F>(monad: T, f: F) -> T::Mapped
    where T: Monad<B>, F: FnOnce(<T as Functor<B>>::Unwrapped) -> T::Mapped {
    monad.bind(f)
}

impl <L, R> Either<L, Either<L, R>> {

    /// Flattens a nested Either
    ///
    /// A Right holding a Right becomes that inner Right. Any Left, outer
    /// or inner, becomes the result.
    pub fn join(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

impl <L, R> Either<L, R> {

    /// Sequences two Eithers, keeping the second one's right value
    ///
    /// If this Either is a Left, its left value is the result. Otherwise
    /// `next` is returned as is.
    pub fn then<B>(self, next: Either<L, B>) -> Either<L, B> {
        self.bind(|_| next)
    }

    /// Sequences two Eithers, keeping the first one's right value
    ///
    /// Both have to be Rights for the result to be a Right. Otherwise
    /// the first Left, in order, is the result.
    pub fn then_left<B>(self, next: Either<L, B>) -> Either<L, R> {
        self.bind(|val| next.fmap(|_| val))
    }
}
