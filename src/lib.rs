//! Synchronous push observables and the `take_while` operator.
//!
//! An [`Observable`] pushes values into an [`Observer`] from inside
//! [`Observable::subscribe`] (or later, for producers that keep the observer
//! around) and hands back an [`Unsub`] that tears the subscription down.
//! Every derived observable wraps its downstream observer in a
//! [`SafeObserver`], so a subscriber sees at most one terminal notification
//! and never anything after it.
//!
//! ```
//! use rxtw::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let out = Rc::new(RefCell::new(Vec::new()));
//! let o = out.clone();
//!
//! of::<_, RxError>(vec![1, 2, 3, 12, 4, 5])
//!     .take_while(|v| *v < 10)
//!     .subscribe(move |v: i32| o.borrow_mut().push(v));
//!
//! assert_eq!(*out.borrow(), vec![1, 2, 3]);
//! ```

#![allow(non_snake_case)]

use std::rc::Rc;

#[macro_use]
mod logging;

mod error;
mod unsub;
mod observer_fn;
mod safe_observer;
mod fac;
mod op;
pub mod util;

pub use crate::error::*;
pub use crate::unsub::*;
pub use crate::safe_observer::*;
pub use crate::fac::*;
pub use crate::op::*;

/// Receiver of push notifications.
///
/// A well behaved producer calls `next` any number of times followed by at
/// most one of `error` / `complete`, and nothing after that.
pub trait Observer<V, E>
{
    fn next(&self, value: V);
    fn error(&self, error: E);
    fn complete(&self);

    /// `true` once the observer will ignore anything it is given.
    /// Synchronous producers poll this to stop emitting early.
    fn is_closed(&self) -> bool { false }
}

/// Shared handle to an observer, as handed to [`create`] producers.
pub type ObserverRc<'o, V, E = RxError> = Rc<dyn Observer<V, E> + 'o>;

/// A lazily started push sequence of `V` that may fail with `E`.
pub trait Observable<'o, V, E = RxError>
{
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o> where Self: Sized;

    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>;

    fn into_dyn<'s>(self) -> DynObservable<'s, 'o, V, E> where Self: Sized + 's
    {
        DynObservable::new(self)
    }
}

/// Type erased, cheaply clonable observable.
pub struct DynObservable<'s, 'o, V, E = RxError>
{
    src: Rc<dyn Observable<'o, V, E> + 's>,
}

impl<'s, 'o, V, E> DynObservable<'s, 'o, V, E>
{
    pub fn new(src: impl Observable<'o, V, E> + 's) -> Self
    {
        DynObservable { src: Rc::new(src) }
    }
}

impl<'s, 'o, V, E> Clone for DynObservable<'s, 'o, V, E>
{
    fn clone(&self) -> Self { DynObservable { src: self.src.clone() } }
}

impl<'s, 'o, V: 'o, E: 'o> Observable<'o, V, E> for DynObservable<'s, 'o, V, E>
{
    #[inline(always)]
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o>
    {
        self.src.subscribe_dyn(Box::new(observer))
    }

    #[inline(always)]
    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o>
    {
        self.src.subscribe_dyn(observer)
    }
}

impl<'o, V, E, Src: Observable<'o, V, E>> Observable<'o, V, E> for Rc<Src>
{
    #[inline(always)]
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o> { Rc::as_ref(self).subscribe(observer) }

    #[inline(always)]
    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o> { Rc::as_ref(self).subscribe_dyn(observer) }
}

impl<'a, 'o, V, E, Src: Observable<'o, V, E>> Observable<'o, V, E> for &'a Src
{
    #[inline(always)]
    fn subscribe(&self, observer: impl Observer<V, E> + 'o) -> Unsub<'o> { (**self).subscribe(observer) }

    #[inline(always)]
    fn subscribe_dyn(&self, observer: Box<dyn Observer<V, E> + 'o>) -> Unsub<'o> { (**self).subscribe_dyn(observer) }
}
