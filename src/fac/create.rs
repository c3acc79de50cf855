use crate::*;
use std::marker::PhantomData;
use std::rc::Rc;

/// Builds an observable from a subscribe function.
///
/// `sub` runs once per subscription and receives the subscriber wrapped in a
/// [`SafeObserver`], so it may emit carelessly: anything after a terminal
/// notification, or after the subscription is disposed, is dropped. The
/// observer handle may be kept for later emission. Whatever `sub` returns
/// becomes the teardown of the subscription; return `()` when there is
/// nothing to tear down.
pub fn create<'o, V, E, F, R>(sub: F) -> Create<V, E, F>
    where F: Fn(ObserverRc<'o, V, E>) -> R, R: Into<Unsub<'o>>
{
    Create { sub, PhantomData }
}

pub struct Create<V, E, F>
{
    sub: F,
    PhantomData: PhantomData<fn(V, E)>
}

impl<'o, V: 'o, E: 'o, F, R> Observable<'o, V, E> for Create<V, E, F>
    where F: Fn(ObserverRc<'o, V, E>) -> R, R: Into<Unsub<'o>>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        let sub = Unsub::new();
        let observer: ObserverRc<'o, V, E> = Rc::new(SafeObserver::new(observer, sub.clone()));

        sub.added((self.sub)(observer).into())
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}
