/// Hands out several handles to one value in a single destructuring `let`,
/// the last one being the original:
/// `let (a, b, c) = Rc::new(Cell::new(0)).clones();`
pub trait Clones<R>: Clone
{
    fn clones(self) -> R;
}

impl<T: Clone> Clones<(T, T)> for T
{
    fn clones(self) -> (T, T) { (self.clone(), self) }
}

impl<T: Clone> Clones<(T, T, T)> for T
{
    fn clones(self) -> (T, T, T) { (self.clone(), self.clone(), self) }
}

impl<T: Clone> Clones<(T, T, T, T)> for T
{
    fn clones(self) -> (T, T, T, T) { (self.clone(), self.clone(), self.clone(), self) }
}
