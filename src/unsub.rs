use std::cell::{Cell, RefCell};
use std::mem;
use std::rc::Rc;

struct State<'a>
{
    done: Cell<bool>,
    cb: RefCell<Option<Box<dyn FnOnce() + 'a>>>,
    children: RefCell<Vec<Unsub<'a>>>,
}

impl<'a> State<'a>
{
    fn unsub_then(&self, f: impl FnOnce())
    {
        if self.done.replace(true) { return; }

        trace!("subscription disposed");

        // Taken out first so teardown code can touch this subscription again.
        let cb = self.cb.borrow_mut().take();
        let children = mem::take(&mut *self.children.borrow_mut());

        if let Some(cb) = cb {
            cb();
        }
        for child in children.into_iter().rev() {
            child.unsub();
        }

        f();
    }

    fn add_internal(&self, child: Unsub<'a>)
    {
        if child.is_done() { return; }

        if self.done.get() {
            child.unsub();
            return;
        }

        self.children.borrow_mut().push(child);
    }
}

/// Handle to an active subscription.
///
/// Clones share the same state. `unsub` is idempotent: the teardown callback
/// and every child run exactly once, children in reverse order of addition.
/// Dropping an `Unsub` does not dispose it.
pub struct Unsub<'a>
{
    state: Rc<State<'a>>
}

impl<'a> Clone for Unsub<'a>
{
    fn clone(&self) -> Unsub<'a>
    {
        Unsub { state: self.state.clone() }
    }
}

impl<'a> Unsub<'a>
{
    pub fn new() -> Unsub<'a>
    {
        Unsub { state: Rc::new(State { done: Cell::new(false), cb: RefCell::new(None), children: RefCell::new(Vec::new()) }) }
    }

    pub fn with(cb: impl FnOnce() + 'a) -> Unsub<'a>
    {
        Unsub { state: Rc::new(State { done: Cell::new(false), cb: RefCell::new(Some(Box::new(cb))), children: RefCell::new(Vec::new()) }) }
    }

    /// An already disposed handle, for producers that finish inside `subscribe`.
    pub fn done() -> Unsub<'a>
    {
        let sub = Unsub::new();
        sub.state.done.set(true);
        sub
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool { self.state.done.get() }

    pub fn unsub(&self)
    {
        self.state.unsub_then(|| {});
    }

    /// Disposes and then runs `f`, but only if this call did the disposing.
    pub fn unsub_then(&self, f: impl FnOnce())
    {
        self.state.unsub_then(f);
    }

    pub fn if_not_done(&self, then: impl FnOnce())
    {
        if !self.is_done() {
            then();
        }
    }

    /// Ties `child` to this subscription. If this one is already disposed
    /// the child is disposed right away.
    pub fn add(&self, child: Unsub<'a>)
    {
        self.state.add_internal(child);
    }

    pub fn added(self, child: Unsub<'a>) -> Self
    {
        self.add(child);
        self
    }

    pub fn add_fn(&self, cb: impl FnOnce() + 'a)
    {
        self.add(Unsub::with(cb));
    }
}

impl<'a> Default for Unsub<'a>
{
    fn default() -> Self { Unsub::new() }
}

impl<'a> From<()> for Unsub<'a>
{
    fn from(_: ()) -> Self { Unsub::done() }
}
