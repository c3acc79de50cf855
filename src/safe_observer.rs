use crate::*;
use std::cell::Cell;
use std::marker::PhantomData;

/// Guards a downstream observer on behalf of a derived observable.
///
/// Drops everything after the first terminal notification or after the
/// associated [`Unsub`] is disposed, and disposes that `Unsub` once the
/// terminal notification has been delivered. This is what tears down a
/// still running source when a subscriber completes early.
pub struct SafeObserver<'o, V, E, O>
{
    dest: O,
    stopped: Cell<bool>,
    sub: Unsub<'o>,
    PhantomData: PhantomData<fn(V, E)>
}

impl<'o, V, E, O: Observer<V, E>> SafeObserver<'o, V, E, O>
{
    pub fn new(dest: O, sub: Unsub<'o>) -> Self
    {
        SafeObserver { dest, stopped: Cell::new(false), sub, PhantomData }
    }

    pub fn sub(&self) -> &Unsub<'o> { &self.sub }

    fn try_stop(&self) -> bool
    {
        if self.stopped.replace(true) || self.sub.is_done() {
            trace!("terminal notification dropped: observer already stopped");
            return false;
        }
        true
    }
}

impl<'o, V, E, O: Observer<V, E>> Observer<V, E> for SafeObserver<'o, V, E, O>
{
    fn next(&self, value: V)
    {
        if self.stopped.get() || self.sub.is_done() {
            trace!("next dropped: observer already stopped");
            return;
        }
        self.dest.next(value);
    }

    fn error(&self, error: E)
    {
        if self.try_stop() {
            self.dest.error(error);
            self.sub.unsub();
        }
    }

    fn complete(&self)
    {
        if self.try_stop() {
            self.dest.complete();
            self.sub.unsub();
        }
    }

    fn is_closed(&self) -> bool
    {
        self.stopped.get() || self.sub.is_done() || self.dest.is_closed()
    }
}
