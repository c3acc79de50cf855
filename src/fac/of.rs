use crate::*;
use std::marker::PhantomData;

/// Replays `values` to every subscriber, then completes.
pub fn of<V: Clone, E>(values: impl IntoIterator<Item = V>) -> Of<V, E>
{
    Of { values: values.into_iter().collect(), PhantomData }
}

pub fn empty<V, E>() -> Empty<V, E> { Empty { PhantomData } }

/// Never emits and never terminates.
pub fn never<V, E>() -> Never<V, E> { Never { PhantomData } }

/// Fails every subscriber with a clone of `error`.
pub fn throw<V, E: Clone>(error: E) -> Throw<V, E> { Throw { error, PhantomData } }

pub struct Of<V, E = RxError>
{
    values: Vec<V>,
    PhantomData: PhantomData<fn(E)>
}

impl<V: Clone, E> Clone for Of<V, E>
{
    fn clone(&self) -> Self { Of { values: self.values.clone(), PhantomData } }
}

impl<V: Clone, E> Of<V, E>
{
    pub fn value(v: V) -> Of<V, E> { Of { values: vec![v], PhantomData } }
}

impl<'o, V: Clone + 'o, E: 'o> Observable<'o, V, E> for Of<V, E>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        for v in self.values.iter() {
            if observer.is_closed() { return Unsub::done(); }
            observer.next(v.clone());
        }
        observer.complete();

        Unsub::done()
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}

pub struct Empty<V, E = RxError> { PhantomData: PhantomData<fn(V, E)> }

impl<'o, V: 'o, E: 'o> Observable<'o, V, E> for Empty<V, E>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        observer.complete();
        Unsub::done()
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}

pub struct Never<V, E = RxError> { PhantomData: PhantomData<fn(V, E)> }

impl<'o, V: 'o, E: 'o> Observable<'o, V, E> for Never<V, E>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        Unsub::with(move || drop(observer))
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}

pub struct Throw<V, E = RxError>
{
    error: E,
    PhantomData: PhantomData<fn(V)>
}

impl<'o, V: 'o, E: Clone + 'o> Observable<'o, V, E> for Throw<V, E>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        observer.error(self.error.clone());
        Unsub::done()
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}
