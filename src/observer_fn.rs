use crate::*;
use std::rc::Rc;

// Closures and tuples of closures as observers; `()` in a slot ignores that notification.

impl<V, E, FN: Fn(V)> Observer<V, E> for FN
{
    #[inline(always)] fn next(&self, value: V) { self(value); }
    #[inline(always)] fn error(&self, _: E) {}
    #[inline(always)] fn complete(&self) {}
}

impl<V, E, FN: Fn(V)> Observer<V, E> for (FN, (), ())
{
    #[inline(always)] fn next(&self, value: V) { self.0(value); }
    #[inline(always)] fn error(&self, _: E) {}
    #[inline(always)] fn complete(&self) {}
}

impl<V, E, FN: Fn(V), FE: Fn(E)> Observer<V, E> for (FN, FE)
{
    #[inline(always)] fn next(&self, value: V) { self.0(value); }
    #[inline(always)] fn error(&self, error: E) { self.1(error); }
    #[inline(always)] fn complete(&self) {}
}

impl<V, E, FN: Fn(V), FE: Fn(E)> Observer<V, E> for (FN, FE, ())
{
    #[inline(always)] fn next(&self, value: V) { self.0(value); }
    #[inline(always)] fn error(&self, error: E) { self.1(error); }
    #[inline(always)] fn complete(&self) {}
}

impl<V, E, FN: Fn(V), FC: Fn()> Observer<V, E> for (FN, (), FC)
{
    #[inline(always)] fn next(&self, value: V) { self.0(value); }
    #[inline(always)] fn error(&self, _: E) {}
    #[inline(always)] fn complete(&self) { self.2(); }
}

impl<V, E, FE: Fn(E), FC: Fn()> Observer<V, E> for ((), FE, FC)
{
    #[inline(always)] fn next(&self, _: V) {}
    #[inline(always)] fn error(&self, error: E) { self.1(error); }
    #[inline(always)] fn complete(&self) { self.2(); }
}

impl<V, E, FE: Fn(E)> Observer<V, E> for ((), FE, ())
{
    #[inline(always)] fn next(&self, _: V) {}
    #[inline(always)] fn error(&self, error: E) { self.1(error); }
    #[inline(always)] fn complete(&self) {}
}

impl<V, E, FC: Fn()> Observer<V, E> for ((), (), FC)
{
    #[inline(always)] fn next(&self, _: V) {}
    #[inline(always)] fn error(&self, _: E) {}
    #[inline(always)] fn complete(&self) { self.2(); }
}

impl<V, E, FN: Fn(V), FE: Fn(E), FC: Fn()> Observer<V, E> for (FN, FE, FC)
{
    #[inline(always)] fn next(&self, value: V) { self.0(value); }
    #[inline(always)] fn error(&self, error: E) { self.1(error); }
    #[inline(always)] fn complete(&self) { self.2(); }
}

impl<'o, V, E> Observer<V, E> for Box<dyn Observer<V, E> + 'o>
{
    #[inline(always)] fn next(&self, value: V) { Box::as_ref(self).next(value); }
    #[inline(always)] fn error(&self, error: E) { Box::as_ref(self).error(error); }
    #[inline(always)] fn complete(&self) { Box::as_ref(self).complete(); }
    #[inline(always)] fn is_closed(&self) -> bool { Box::as_ref(self).is_closed() }
}

impl<V, E, O: Observer<V, E> + ?Sized> Observer<V, E> for Rc<O>
{
    #[inline(always)] fn next(&self, value: V) { Rc::as_ref(self).next(value); }
    #[inline(always)] fn error(&self, error: E) { Rc::as_ref(self).error(error); }
    #[inline(always)] fn complete(&self) { Rc::as_ref(self).complete(); }
    #[inline(always)] fn is_closed(&self) -> bool { Rc::as_ref(self).is_closed() }
}

#[cfg(test)]
mod test
{
    use crate::*;
    use std::cell::Cell;

    #[test]
    fn tuples()
    {
        let n = Cell::new(0);

        of::<_, RxError>(vec![1, 2]).subscribe((|v: i32| n.set(n.get() + v), (), || n.set(n.get() + 100)));
        assert_eq!(n.get(), 103);

        n.set(0);
        throw::<i32, _>(RxError::from("x")).subscribe(((), |_e: RxError| n.set(n.get() + 10), || n.set(n.get() + 100)));
        assert_eq!(n.get(), 10);

        n.set(0);
        empty::<i32, RxError>().subscribe(((), (), || n.set(n.get() + 100)));
        assert_eq!(n.get(), 100);
    }
}
