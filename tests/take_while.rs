use rxtw::util::RxNoti::{Comp, Err, Next};
use rxtw::util::*;
use rxtw::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn expected_prefix(values: &[i32], pred: impl Fn(i32, usize) -> bool) -> Vec<RxNoti<i32, RxError>>
{
    let mut out: Vec<_> = values.iter().enumerate()
        .take_while(|(i, v)| pred(**v, *i))
        .map(|(_, v)| Next(*v))
        .collect();
    out.push(Comp);
    out
}

#[test]
fn longest_prefix_for_many_inputs()
{
    let inputs: Vec<Vec<i32>> = vec![
        vec![],
        vec![1],
        vec![11],
        vec![1, 2, 3, 12, 4, 5],
        vec![3, 3, 3],
        vec![10, 1, 2],
        (0..50).collect(),
        vec![-4, 8, 9, 10, 9, 8],
    ];

    for values in inputs {
        let rec = Recorder::new();
        of(values.clone()).take_while(|v| *v < 10).subscribe(rec.clone());
        assert_eq!(rec.notifications(), expected_prefix(&values, |v, _| v < 10), "input {:?}", values);
        assert_eq!(rec.terminals(), 1);

        let rec = Recorder::new();
        of(values.clone()).take_while_indexed(|v, i, _| (*v as i64) + (i as i64) < 12).subscribe(rec.clone());
        assert_eq!(rec.notifications(), expected_prefix(&values, |v, i| (v as i64) + (i as i64) < 12), "input {:?}", values);
    }
}

#[test]
fn first_false_completes_instead_of_forwarding()
{
    let rec = Recorder::new();
    of(vec![9, 9, 9, 9]).take_while_indexed(|_, i, _| i < 2).subscribe(rec.clone());

    assert_eq!(rec.notifications(), vec![Next(9), Next(9), Comp]);
}

#[test]
fn indices_restart_per_subscription()
{
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();

    let op = of::<_, RxError>(vec!['a', 'b', 'c']).take_while_indexed(move |_, i, _| { s.borrow_mut().push(i); true });

    op.subscribe(Recorder::new());
    op.subscribe(Recorder::new());

    assert_eq!(*seen.borrow(), vec![0, 1, 2, 0, 1, 2]);
}

#[test]
fn empty_source_never_asks()
{
    let asked = Rc::new(Cell::new(false));
    let a = asked.clone();
    let rec = Recorder::<i32>::new();

    empty().take_while(move |_| { a.set(true); false }).subscribe(rec.clone());

    assert_eq!(rec.notifications(), vec![Comp]);
    assert!(!asked.get());
}

#[test]
fn always_true_mirrors_error()
{
    let rec = Recorder::new();
    let src = create(|o: ObserverRc<'_, &'static str>| {
        o.next("a");
        o.next("b");
        o.error(RxError::custom("gone"));
    });

    src.take_while(|_| true).subscribe(rec.clone());
    assert_eq!(rec.notifications(), vec![Next("a"), Next("b"), Err(RxError::custom("gone"))]);
}

#[test]
fn predicate_error_on_third_element()
{
    let slot: Rc<RefCell<Option<ObserverRc<'static, i32>>>> = Rc::new(RefCell::new(None));
    let s = slot.clone();
    let src = create(move |o| { *s.borrow_mut() = Some(o); });

    let rec = Recorder::new();
    let indices = Rc::new(RefCell::new(Vec::new()));
    let ix = indices.clone();

    src.try_take_while(move |_, i, _| {
        ix.borrow_mut().push(i);
        if i == 2 { Result::Err(RxError::predicate(i, "third")) } else { Ok(true) }
    }).subscribe(rec.clone());

    let o = slot.borrow().clone().expect("subscribed");
    o.next(1);
    o.next(2);
    o.next(3);
    o.next(4);
    o.complete();

    assert_eq!(rec.notifications(), vec![Next(1), Next(2), Err(RxError::predicate(2, "third"))]);
    assert_eq!(*indices.borrow(), vec![0, 1, 2]);
    assert!(o.is_closed());
}

#[derive(Debug, Clone, PartialEq)]
enum ParseError
{
    NotANumber(String),
}

#[test]
fn custom_error_type()
{
    let rec: Recorder<&str, ParseError> = Recorder::default();

    of(vec!["1", "2", "x", "3"])
        .try_take_while(|s, _, _| s.parse::<i32>().map(|n| n > 0).map_err(|_| ParseError::NotANumber(s.to_string())))
        .subscribe(rec.clone());

    assert_eq!(rec.notifications(), vec![Next("1"), Next("2"), Err(ParseError::NotANumber("x".to_owned()))]);
}

#[test]
fn execution_context()
{
    struct Window { from: usize, until: usize }

    impl Window
    {
        fn admits(&self, index: usize) -> bool { index >= self.from && index < self.until }
    }

    let rec = Recorder::new();
    iter_clone(10..20)
        .take_while_with(Window { from: 0, until: 3 }, |w: &Window, _: &i32, i, _| Ok(w.admits(i)))
        .subscribe(rec.clone());

    assert_eq!(rec.values(), vec![10, 11, 12]);
    assert_eq!(rec.terminals(), 1);
}
