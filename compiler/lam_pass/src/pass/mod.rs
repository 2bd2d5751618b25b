//! The pass-execution monad.
//!
//! A [`Pass`] is a deferred computation over pass-local state `S` that either
//! produces a value `A` or fails with a [`PassError`]. Passes compose with
//! [`Pass::map`], [`Pass::and_then`], [`Pass::then`], [`sequence`] and
//! [`traverse`]; the first error aborts every remaining step.
//!
//! Two entry points run a pass against an initial state:
//!
//! - [`evaluate`] returns the produced value and drops the final state
//! - [`execute`] returns the final state and drops the produced value
//!
//! On failure both return only the error. The state a failed pass was
//! working on is dropped with it, so no partially updated state escapes.
//!
//! # Example
//!
//! ```text
//! let count = modify(|n: &mut u32| *n += 1)
//!     .then(gets(|n: &u32| *n * 10));
//!
//! assert_eq!(evaluate(count, 4), Ok(50));
//! ```
//!
//! Recursive passes usually write their inner steps as plain functions over
//! `&mut S` returning [`PassResult`], propagating with `?`, and wrap them
//! with [`Pass::new`] at the seams where steps are sequenced.

use lam_diagnostic::{PassError, PassResult};

/// One step (or a composition of steps) of a compiler pass.
#[must_use = "a pass does nothing until it is evaluated or executed"]
pub struct Pass<'a, S, A> {
    step: Box<dyn FnOnce(&mut S) -> PassResult<A> + 'a>,
}

impl<'a, S: 'a, A: 'a> Pass<'a, S, A> {
    /// Wrap a step that may read and replace the state and may fail.
    pub fn new<F>(step: F) -> Self
    where
        F: FnOnce(&mut S) -> PassResult<A> + 'a,
    {
        Pass {
            step: Box::new(step),
        }
    }

    /// A step that succeeds with `value` and leaves the state alone.
    pub fn pure(value: A) -> Self {
        Pass::new(move |_| Ok(value))
    }

    /// A step that aborts the pass with `error`.
    pub fn fail(error: PassError) -> Self {
        Pass::new(move |_| Err(error))
    }

    /// A step that reports an already computed outcome.
    pub fn lift(result: PassResult<A>) -> Self {
        Pass::new(move |_| result)
    }

    /// Run the step against caller-held state.
    ///
    /// On failure `state` may have been partially updated. Callers outside
    /// this module go through [`evaluate`] or [`execute`], which discard it.
    pub fn run(self, state: &mut S) -> PassResult<A> {
        (self.step)(state)
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> Pass<'a, S, B>
    where
        B: 'a,
        F: FnOnce(A) -> B + 'a,
    {
        Pass::new(move |state| self.run(state).map(f))
    }

    /// Feed the produced value into the next step.
    pub fn and_then<B, F>(self, f: F) -> Pass<'a, S, B>
    where
        B: 'a,
        F: FnOnce(A) -> Pass<'a, S, B> + 'a,
    {
        Pass::new(move |state| {
            let value = self.run(state)?;
            f(value).run(state)
        })
    }

    /// Run `next` after this step, keeping only `next`'s value.
    pub fn then<B: 'a>(self, next: Pass<'a, S, B>) -> Pass<'a, S, B> {
        self.and_then(move |_| next)
    }
}

/// Read a copy of the current state.
pub fn get<'a, S: Clone + 'a>() -> Pass<'a, S, S> {
    Pass::new(|state: &mut S| Ok(state.clone()))
}

/// Project a value out of the current state.
pub fn gets<'a, S: 'a, A: 'a>(f: impl FnOnce(&S) -> A + 'a) -> Pass<'a, S, A> {
    Pass::new(move |state: &mut S| Ok(f(state)))
}

/// Replace the current state.
pub fn put<'a, S: 'a>(new_state: S) -> Pass<'a, S, ()> {
    Pass::new(move |state: &mut S| {
        *state = new_state;
        Ok(())
    })
}

/// Update the current state in place.
pub fn modify<'a, S: 'a>(f: impl FnOnce(&mut S) + 'a) -> Pass<'a, S, ()> {
    Pass::new(move |state: &mut S| {
        f(state);
        Ok(())
    })
}

/// Run `passes` in order and collect their values.
pub fn sequence<'a, S: 'a, A: 'a>(
    passes: impl IntoIterator<Item = Pass<'a, S, A>>,
) -> Pass<'a, S, Vec<A>> {
    let passes: Vec<_> = passes.into_iter().collect();
    Pass::new(move |state| passes.into_iter().map(|pass| pass.run(state)).collect())
}

/// Build a step for each item with `f` and run them in order.
///
/// Steps are built lazily: once one fails, `f` is not called for the
/// remaining items.
pub fn traverse<'a, S, T, A, F>(items: impl IntoIterator<Item = T>, mut f: F) -> Pass<'a, S, Vec<A>>
where
    S: 'a,
    T: 'a,
    A: 'a,
    F: FnMut(T) -> Pass<'a, S, A> + 'a,
{
    let items: Vec<T> = items.into_iter().collect();
    Pass::new(move |state| {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            values.push(f(item).run(state)?);
        }
        Ok(values)
    })
}

/// Run `pass` from `initial` and return its value. The final state is
/// dropped.
pub fn evaluate<S, A>(pass: Pass<'_, S, A>, initial: S) -> PassResult<A> {
    let mut state = initial;
    pass.run(&mut state)
        .inspect_err(|error| tracing::debug!(%error, "pass aborted"))
}

/// Run `pass` from `initial` and return its final state. The produced value
/// is dropped.
pub fn execute<S, A>(pass: Pass<'_, S, A>, initial: S) -> PassResult<S> {
    let mut state = initial;
    match pass.run(&mut state) {
        Ok(_) => Ok(state),
        Err(error) => {
            tracing::debug!(%error, "pass aborted");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests;
