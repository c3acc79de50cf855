use crate::*;
use std::cell::RefCell;
use std::marker::PhantomData;

/// Replays a clonable iterator from the start for every subscriber.
pub fn iter_clone<It: Iterator + Clone, E>(it: It) -> Iter<It, E>
{
    Iter { it, PhantomData }
}

/// Drains `it` into the first subscriber. Later subscribers are failed with
/// [`RxError::IterConsumed`].
pub fn iter_once<It: Iterator, E>(it: It) -> Iter<Once<It>, E>
{
    Iter { it: Once(RefCell::new(Some(it))), PhantomData }
}

pub struct Iter<It, E = RxError>
{
    it: It,
    PhantomData: PhantomData<fn(E)>
}

pub struct Once<It>(RefCell<Option<It>>);

impl<'o, It, E> Observable<'o, It::Item, E> for Iter<Once<It>, E>
    where It: Iterator, It::Item: 'o, E: From<RxError> + 'o
{
    fn subscribe(&self, observer: impl Observer<It::Item, E> + 'o) -> Unsub<'o>
    {
        let it = self.it.0.borrow_mut().take();

        if let Some(it) = it {
            for v in it {
                if observer.is_closed() { return Unsub::done(); }
                observer.next(v);
            }
            observer.complete();
        } else {
            observer.error(RxError::IterConsumed.into());
        }

        Unsub::done()
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<It::Item, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}

impl<'o, It, E> Observable<'o, It::Item, E> for Iter<It, E>
    where It: Iterator + Clone, It::Item: 'o, E: 'o
{
    fn subscribe(&self, observer: impl Observer<It::Item, E> + 'o) -> Unsub<'o>
    {
        for v in self.it.clone() {
            if observer.is_closed() { return Unsub::done(); }
            observer.next(v);
        }
        observer.complete();

        Unsub::done()
    }

    fn subscribe_dyn(&self, observer: Box<dyn Observer<It::Item, E> + 'o>) -> Unsub<'o>
    { self.subscribe(observer) }
}

#[cfg(test)]
mod test
{
    use crate::*;
    use std::cell::Cell;

    #[test]
    fn once()
    {
        let vec = vec![1, 2, 3];
        let obs = iter_once::<_, RxError>(vec.into_iter());

        let n = Cell::new(0);
        obs.subscribe((|i: i32| { n.replace(i); }, |_: RxError| { n.replace(-1); }));
        assert_eq!(n.get(), 3);

        n.replace(0);
        obs.subscribe((|i: i32| { n.replace(i); }, |e: RxError| { assert_eq!(e, RxError::IterConsumed); n.replace(-1); }));
        assert_eq!(n.get(), -1);
    }

    #[test]
    fn clone()
    {
        let vec = vec![1, 2, 3];
        let obs = iter_clone::<_, RxError>(vec.iter());

        let n = Cell::new(0);
        obs.subscribe((|i: &i32| { n.replace(*i); }, (), || { n.replace(n.get() + 100); }));
        assert_eq!(n.get(), 103);

        n.replace(0);
        obs.subscribe((|i: &i32| { n.replace(*i); }, (), || { n.replace(n.get() + 100); }));
        assert_eq!(n.get(), 103);
    }

    #[test]
    fn stops_when_closed()
    {
        let n = Cell::new(0);
        let obs = iter_clone::<_, RxError>(0..);

        obs.take_while(|v| *v < 5).subscribe(|_: i32| n.set(n.get() + 1));
        assert_eq!(n.get(), 5);
    }
}
