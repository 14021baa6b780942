//! # The either transformer module
//! This module contains EitherT, an Either layered over a function of an environment
//!
//! An `EitherT<E, L, R>` is a computation that reads an environment of type
//! `E` and produces an `Either<L, R>`. Mapping, applying and binding work on
//! the right value of the produced Either, so a chain of EitherT values
//! behaves like a chain of Eithers that is only run once an environment is
//! supplied. A Left produced anywhere in the chain short-circuits the rest.

use crate::either::Either;
use crate::functor::Functor;
use crate::applicative::{Applicative, Apply};
use crate::monad::Monad;

/// Represents a function of an environment that produces an Either
pub struct EitherT<E, L, R> {
    run: Box<dyn Fn(E) -> Either<L, R>>,
}

impl <E: 'static, L: 'static, R: 'static> EitherT<E, L, R> {

    /// Wraps a function producing an Either
    pub fn new<F>(run: F) -> EitherT<E, L, R>
        where F: Fn(E) -> Either<L, R> + 'static {
        EitherT { run: Box::new(run) }
    }

    /// Lifts a plain function of the environment, whose results are all Rights
    pub fn lift<F>(f: F) -> EitherT<E, L, R>
        where F: Fn(E) -> R + 'static {
        EitherT::new(move |env| Either::Right(f(env)))
    }

    /// Creates a computation that always fails with the default left value
    pub fn fail() -> EitherT<E, L, R>
        where L: Default {
        EitherT::new(|_| Either::Left(L::default()))
    }

    /// Runs the computation in the given environment
    pub fn run(&self, env: E) -> Either<L, R> {
        (self.run)(env)
    }

    /// Maps a function over the right values the computation produces
    ///
    /// The function is never called for an environment in which the
    /// computation produces a Left.
    pub fn fmap<B: 'static, G>(self, g: G) -> EitherT<E, L, B>
        where G: Fn(R) -> B + 'static {
        let run = self.run;

        EitherT::new(move |env| run(env).fmap(&g))
    }

    /// Sequences this computation with one chosen by its right value
    ///
    /// Both computations are run in the same environment. If this one
    /// produces a Left, `g` is not called and the Left is the result.
    pub fn bind<B: 'static, G>(self, g: G) -> EitherT<E, L, B>
        where G: Fn(R) -> EitherT<E, L, B> + 'static, E: Clone {
        let run = self.run;

        EitherT::new(move |env: E| run(env.clone()).bind(|val| g(val).run(env)))
    }

    /// Falls back to another computation when this one produces a Left
    ///
    /// The first Right wins. If both produce a Left, the second one's
    /// left value is the result.
    pub fn or(self, other: EitherT<E, L, R>) -> EitherT<E, L, R>
        where E: Clone {
        let (first, second) = (self.run, other.run);

        EitherT::new(move |env: E| match first(env.clone()) {
            Either::Left(_) => {
                trace!("Falling back to the alternative computation");
                second(env)
            },
            right => right
        })
    }
}

/// Lifting a value produces a computation that ignores its environment
impl <E: 'static, L: 'static, R: Clone + 'static> Applicative for EitherT<E, L, R> {
    type Unwrapped = R;

    fn pure(value: R) -> EitherT<E, L, R> {
        EitherT::new(move |_| Either::Right(value.clone()))
    }
}

/// Runs both computations in the same environment and applies the results
///
/// Left values are resolved the way `Apply` for Either resolves them: the
/// function side's left value wins.
impl <E, L, F, A, B> Apply<A> for EitherT<E, L, F>
    where E: Clone + 'static, L: 'static, F: FnOnce(A) -> B + 'static, A: 'static, B: 'static {
    type Arg = EitherT<E, L, A>;
    type Output = EitherT<E, L, B>;

    fn apply(self, arg: EitherT<E, L, A>) -> EitherT<E, L, B> {
        let (fun, val) = (self.run, arg.run);

        EitherT::new(move |env: E| fun(env.clone()).apply(val(env)))
    }
}
