//! # The applicative module
//! This module contains the Applicative and Apply traits and their implementations for Either
//!
//! Applicative style lets a plain function of several arguments be applied
//! to arguments that are each wrapped in an Either. The function is curried,
//! mapped over the first argument, and then applied to the rest in turn:
//!
//! ```
//! use either::{apply, map, make_right, Either};
//!
//! let sum = apply(map(|x: i32| move |y: i32| x + y, make_right::<String, _>(1)), make_right(1));
//!
//! assert_eq!(sum, Either::Right(2));
//! ```

use crate::either::Either;
use crate::functor::Functor;

/// Provides the ability to lift a plain value into a structure
pub trait Applicative: Sized {
    /// The type of the value being lifted
    type Unwrapped;

    /// Wraps a value in the minimal structure that holds it
    fn pure(value: Self::Unwrapped) -> Self;
}

/// Provides the ability to apply a wrapped function to a wrapped argument
///
/// `Self` is a structure around a function taking an `A`.
pub trait Apply<A> {
    /// The structure around the argument
    type Arg;
    /// The structure around the function's result
    type Output;

    /// Applies the wrapped function to the wrapped argument
    fn apply(self, arg: Self::Arg) -> Self::Output;
}

/// Lifting a value into an Either always produces a Right
impl <L, R> Applicative for Either<L, R> {
    type Unwrapped = R;

    fn pure(value: R) -> Either<L, R> {
        Either::Right(value)
    }
}

/// Applies a function held in a Right to an argument held in a Right
///
/// If either side is a Left, that left value is the result. When both are,
/// the left value of the function side wins.
impl <L, F, A, B> Apply<A> for Either<L, F>
    where F: FnOnce(A) -> B {
    type Arg = Either<L, A>;
    type Output = Either<L, B>;

    fn apply(self, arg: Either<L, A>) -> Either<L, B> {
        match (self, arg) {
            (Either::Right(f), Either::Right(val)) => Either::Right(f(val)),
            (Either::Left(err), _) => {
                trace!("Application short-circuited on the function side");
                Either::Left(err)
            },
            (Either::Right(_), Either::Left(err)) => {
                trace!("Application short-circuited on the argument side");
                Either::Left(err)
            }
        }
    }
}

/// Lifts a plain value into an applicative
///
/// The target type usually has to be named, either through an annotation
/// on the result or with a turbofish: `pure::<Either<String, _>>(1)`.
pub fn pure<T>(value: T::Unwrapped) -> T
    where T: Applicative {
    T::pure(value)
}

/// Applies a wrapped function to a wrapped argument
pub fn apply<T, A>(f: T, arg: T::Arg) -> T::Output
    where T: Apply<A> {
    f.apply(arg)
}

/// Combines two Eithers with a binary function
///
/// The function is only called when both arguments are Rights.
/// Otherwise the first Left, in argument order, is the result.
pub fn lift2<L, A, B, C, F>(f: F, a: Either<L, A>, b: Either<L, B>) -> Either<L, C>
    where F: FnOnce(A, B) -> C {
    a.fmap(move |x| move |y| f(x, y)).apply(b)
}


// Module containing applicative tests
#[cfg(test)]
mod tests {
    use super::{Applicative, Apply, pure, apply, lift2};
    use crate::either::{Either, make_left, make_right};
    use crate::functor::map;

    type Fun = fn(i32) -> i32;

    fn add(x: i32) -> impl Fn(i32) -> i32 {
        move |y| x + y
    }

    fn values() -> Vec<Either<String, i32>> {
        vec![make_left("v".to_string()), make_right(0), make_right(5)]
    }

    fn functions(tag: &str) -> Vec<Either<String, Fun>> {
        let double: Fun = |x| x * 2;
        let negate: Fun = |x| -x;

        vec![make_left(tag.to_string()), make_right(double), make_right(negate)]
    }

    // Tests the pure function
    #[test]
    fn test_pure() {
        let e: Either<String, f32> = pure(12.0);

        assert_eq!(e, Either::Right(12.0));
        assert_eq!(Either::<String, f32>::pure(12.0), e);
    }

    // Tests the apply function with a function and an argument
    #[test]
    fn test_apply_right_right() {
        let e = apply(map(add, make_right::<i32, i32>(1)), make_right(1));

        assert_eq!(e, Either::Right(2));
    }

    // Tests the apply function with a missing function
    #[test]
    fn test_apply_left_right() {
        let e = apply(map(add, make_left::<i32, i32>(1)), make_right(1));

        assert_eq!(e, Either::Left(1));
    }

    // Tests the apply function with a missing argument
    #[test]
    fn test_apply_right_left() {
        let e = apply(map(add, make_right::<i32, i32>(1)), make_left(1));

        assert_eq!(e, Either::Left(1));
    }

    // Tests the apply function with both sides missing
    #[test]
    fn test_apply_left_left() {
        let e = apply(map(add, make_left::<i32, i32>(1)), make_left(2));

        // The function side's left value wins
        assert_eq!(e, Either::Left(1));
    }

    // Tests that apply does not call the function when the argument is missing
    #[test]
    fn test_apply_not_called() {
        let mut called = false;
        let f = make_right::<&str, _>(|x: i32| {
            called = true;
            x
        });

        assert_eq!(f.apply(make_left("missing")), Either::Left("missing"));
        assert!(!called);
    }

    // Tests the lift2 function
    #[test]
    fn test_lift2() {
        let concat = |a: String, b: &str| a + b;

        assert_eq!(
            lift2(concat, make_right::<i32, _>("ab".to_string()), make_right("cd")),
            Either::Right("abcd".to_string())
        );
        assert_eq!(lift2(concat, make_left::<String, i32>(1), make_right("cd")), Either::Left(1));
        assert_eq!(lift2(concat, make_right::<i32, _>("ab".to_string()), make_left(2)), Either::Left(2));
        // The first left value wins
        assert_eq!(lift2(concat, make_left::<String, i32>(1), make_left(2)), Either::Left(1));
    }

    // Tests the applicative identity law
    #[test]
    fn test_identity_law() {
        for v in values() {
            let id = Either::<String, _>::pure(|x: i32| x);

            assert_eq!(apply(id, v.clone()), v, "identity law broken for {:?}", v);
        }
    }

    // Tests the applicative homomorphism law
    #[test]
    fn test_homomorphism_law() {
        for x in -2..3 {
            let f: Fun = |x| x * 3 + 1;
            let lhs: Either<String, i32> = apply(Either::pure(f), Either::pure(x));
            let rhs: Either<String, i32> = pure(f(x));

            assert_eq!(lhs, rhs);
        }
    }

    // Tests the applicative interchange law
    #[test]
    fn test_interchange_law() {
        for u in functions("u") {
            for y in -2..3 {
                let lhs = apply(u.clone(), Either::pure(y));
                let rhs = apply(Either::pure(move |f: Fun| f(y)), u.clone());

                assert_eq!(lhs, rhs, "interchange law broken for left value {:?} and {}", u.clone().left(), y);
            }
        }
    }

    // Tests the applicative composition law
    #[test]
    fn test_composition_law() {
        let compose = |f: Fun| move |g: Fun| move |x: i32| f(g(x));

        for u in functions("u") {
            for v in functions("v") {
                for w in values() {
                    let lhs = apply(apply(apply(Either::pure(compose), u.clone()), v.clone()), w.clone());
                    let rhs = apply(u.clone(), apply(v.clone(), w.clone()));

                    assert_eq!(lhs, rhs, "composition law broken for {:?}", w);
                }
            }
        }
    }
}
