use crate::*;
use std::cell::Cell;
use std::rc::Rc;

/// The question `take_while` asks for every value while its gate is open.
///
/// `index` counts the values evaluated so far on this subscription, starting
/// at 0. `source` is the observable `take_while` was applied to; it is there
/// to be looked at, not subscribed to. An `Err` ends the sequence with that
/// error.
pub trait TakeWhilePredicate<Ctx, V, E, Src>
{
    fn test(&self, ctx: &Ctx, value: &V, index: usize, source: &Src) -> Result<bool, E>;
}

pub struct ByValue<F>(F);
pub struct Indexed<F>(F);
pub struct Fallible<F>(F);
pub struct WithContext<F>(F);

impl<Ctx, V, E, Src, F: Fn(&V) -> bool> TakeWhilePredicate<Ctx, V, E, Src> for ByValue<F>
{
    #[inline(always)]
    fn test(&self, _: &Ctx, value: &V, _: usize, _: &Src) -> Result<bool, E> { Ok((self.0)(value)) }
}

impl<Ctx, V, E, Src, F: Fn(&V, usize, &Src) -> bool> TakeWhilePredicate<Ctx, V, E, Src> for Indexed<F>
{
    #[inline(always)]
    fn test(&self, _: &Ctx, value: &V, index: usize, source: &Src) -> Result<bool, E> { Ok((self.0)(value, index, source)) }
}

impl<Ctx, V, E, Src, F: Fn(&V, usize, &Src) -> Result<bool, E>> TakeWhilePredicate<Ctx, V, E, Src> for Fallible<F>
{
    #[inline(always)]
    fn test(&self, _: &Ctx, value: &V, index: usize, source: &Src) -> Result<bool, E> { (self.0)(value, index, source) }
}

impl<Ctx, V, E, Src, F: Fn(&Ctx, &V, usize, &Src) -> Result<bool, E>> TakeWhilePredicate<Ctx, V, E, Src> for WithContext<F>
{
    #[inline(always)]
    fn test(&self, ctx: &Ctx, value: &V, index: usize, source: &Src) -> Result<bool, E> { (self.0)(ctx, value, index, source) }
}

struct Inner<Src, Ctx, P>
{
    src: Src,
    ctx: Ctx,
    pred: P,
}

/// Mirrors its source for as long as the predicate holds, then completes.
///
/// Each subscription gets its own index and gate. The first value the
/// predicate rejects is not forwarded; the subscriber is completed instead
/// and the source subscription is disposed. A failing predicate closes the
/// gate the same way and reports its error. Source errors and completion
/// pass through untouched.
pub struct TakeWhileOp<Src, Ctx, P>
{
    inner: Rc<Inner<Src, Ctx, P>>,
}

impl<Src, Ctx, P> Clone for TakeWhileOp<Src, Ctx, P>
{
    fn clone(&self) -> Self { TakeWhileOp { inner: self.inner.clone() } }
}

impl<Src, Ctx, P> TakeWhileOp<Src, Ctx, P>
{
    pub fn new(src: Src, ctx: Ctx, pred: P) -> Self
    {
        TakeWhileOp { inner: Rc::new(Inner { src, ctx, pred }) }
    }

    pub fn source(&self) -> &Src { &self.inner.src }
}

pub trait ObsTakeWhileOp<'o, V, E>: Observable<'o, V, E> + Sized
{
    fn take_while<F>(self, pred: F) -> TakeWhileOp<Self, (), ByValue<F>>
        where F: Fn(&V) -> bool
    {
        TakeWhileOp::new(self, (), ByValue(pred))
    }

    fn take_while_indexed<F>(self, pred: F) -> TakeWhileOp<Self, (), Indexed<F>>
        where F: Fn(&V, usize, &Self) -> bool
    {
        TakeWhileOp::new(self, (), Indexed(pred))
    }

    /// Like `take_while_indexed`, but the predicate may fail; its error is
    /// delivered to the subscriber in place of a decision.
    fn try_take_while<F>(self, pred: F) -> TakeWhileOp<Self, (), Fallible<F>>
        where F: Fn(&V, usize, &Self) -> Result<bool, E>
    {
        TakeWhileOp::new(self, (), Fallible(pred))
    }

    /// Fallible predicate that is handed `ctx` on every call, for predicates
    /// written against some receiver object.
    fn take_while_with<Ctx, F>(self, ctx: Ctx, pred: F) -> TakeWhileOp<Self, Ctx, WithContext<F>>
        where F: Fn(&Ctx, &V, usize, &Self) -> Result<bool, E>
    {
        TakeWhileOp::new(self, ctx, WithContext(pred))
    }
}

impl<'o, V, E, Src: Observable<'o, V, E>> ObsTakeWhileOp<'o, V, E> for Src {}

struct TakeWhileState
{
    index: Cell<usize>,
    gate_open: Cell<bool>,
}

impl TakeWhileState
{
    fn new() -> Self { TakeWhileState { index: Cell::new(0), gate_open: Cell::new(true) } }
}

struct TakeWhileObserver<'o, V, E, O, Src, Ctx, P>
{
    dest: SafeObserver<'o, V, E, O>,
    state: TakeWhileState,
    inner: Rc<Inner<Src, Ctx, P>>,
}

impl<'o, V, E, O, Src, Ctx, P> Observer<V, E> for TakeWhileObserver<'o, V, E, O, Src, Ctx, P>
    where O: Observer<V, E>, P: TakeWhilePredicate<Ctx, V, E, Src>
{
    fn next(&self, value: V)
    {
        let state = &self.state;
        if !state.gate_open.get() { return; }

        let index = state.index.get();
        state.index.set(index + 1);

        // Closed until the predicate says otherwise: nothing is evaluated after a terminal outcome.
        state.gate_open.set(false);

        let Inner { src, ctx, pred } = self.inner.as_ref();
        match pred.test(ctx, &value, index, src) {
            Ok(true) => {
                state.gate_open.set(true);
                self.dest.next(value);
            },
            Ok(false) => {
                debug!(index, "take_while: predicate rejected value, completing");
                self.dest.complete();
            },
            Err(e) => {
                debug!(index, "take_while: predicate failed");
                self.dest.error(e);
            }
        }
    }

    #[inline(always)]
    fn error(&self, error: E) { self.dest.error(error); }

    #[inline(always)]
    fn complete(&self) { self.dest.complete(); }

    fn is_closed(&self) -> bool { !self.state.gate_open.get() || self.dest.is_closed() }
}

impl<'o, V: 'o, E: 'o, Src, Ctx: 'o, P> Observable<'o, V, E> for TakeWhileOp<Src, Ctx, P>
    where Src: Observable<'o, V, E> + 'o, P: TakeWhilePredicate<Ctx, V, E, Src> + 'o
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        let sub = Unsub::new();
        let dest = SafeObserver::new(observer, sub.clone());

        sub.added(self.inner.src.subscribe(TakeWhileObserver {
            dest,
            state: TakeWhileState::new(),
            inner: self.inner.clone(),
        }))
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}
