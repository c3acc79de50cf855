use crate::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RxNoti<V, E>
{
    Next(V),
    Err(E),
    Comp,
}

/// Observer that writes down every notification it gets, in order, without
/// judging them. Clones share one log.
pub struct Recorder<V, E = RxError>
{
    log: Rc<RefCell<Vec<RxNoti<V, E>>>>,
}

impl<V, E> Clone for Recorder<V, E>
{
    fn clone(&self) -> Self { Recorder { log: self.log.clone() } }
}

impl<V, E> Default for Recorder<V, E>
{
    fn default() -> Self { Recorder { log: Rc::new(RefCell::new(Vec::new())) } }
}

impl<V> Recorder<V>
{
    pub fn new() -> Self { Recorder::default() }
}

impl<V: Clone, E: Clone> Recorder<V, E>
{
    pub fn notifications(&self) -> Vec<RxNoti<V, E>> { self.log.borrow().clone() }

    pub fn values(&self) -> Vec<V>
    {
        self.log.borrow().iter().filter_map(|n| match n {
            RxNoti::Next(v) => Some(v.clone()),
            _ => None
        }).collect()
    }
}

impl<V, E> Recorder<V, E>
{
    /// Number of `error` and `complete` notifications seen.
    pub fn terminals(&self) -> usize
    {
        self.log.borrow().iter().filter(|n| !matches!(n, RxNoti::Next(_))).count()
    }
}

impl<V, E> Observer<V, E> for Recorder<V, E>
{
    fn next(&self, value: V) { self.log.borrow_mut().push(RxNoti::Next(value)); }
    fn error(&self, error: E) { self.log.borrow_mut().push(RxNoti::Err(error)); }
    fn complete(&self) { self.log.borrow_mut().push(RxNoti::Comp); }
}
