//! # The functor module
//! This module contains the Functor trait and its implementation for Either

use crate::either::Either;

/// Provides the ability to map a function over the contents of a structure
///
/// `Self` is some structure around a value of type `Unwrapped`, and mapping
/// a function `Unwrapped -> B` over it produces the same structure around a
/// `B`, which is `Mapped`.
///
/// Implementations must obey the functor laws:
/// mapping the identity function changes nothing, and mapping `f` then `g`
/// is the same as mapping their composition once.
pub trait Functor<B> {
    /// The type of the value the function is applied to
    type Unwrapped;
    /// The structure after mapping, holding a `B`
    type Mapped;

    /// Maps a function over the contained value, consuming the structure
    fn fmap<F>(self, f: F) -> Self::Mapped
        where F: FnOnce(Self::Unwrapped) -> B;
}

/// Either is a functor in its right value
///
/// A Right has the function applied to its value. A Left is passed
/// through with its value untouched, and the function is not called.
impl <L, R, B> Functor<B> for Either<L, R> {
    type Unwrapped = R;
    type Mapped = Either<L, B>;

    fn fmap<F>(self, f: F) -> Either<L, B>
        where F: FnOnce(R) -> B {
        match self {
            Either::Left(val) => Either::Left(val),
            Either::Right(val) => Either::Right(f(val))
        }
    }
}

/// Maps a function over a functor
///
/// This is `Functor::fmap` with the function first, which reads well when
/// the function is short and the functor is a longer expression.
pub fn map<T, B, F>(f: F, functor: T) -> T::Mapped
    where T: Functor<B>, F: FnOnce(T::Unwrapped) -> B {
    functor.fmap(f)
}
