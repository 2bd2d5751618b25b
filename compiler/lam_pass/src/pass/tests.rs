use std::cell::Cell;

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_pure_leaves_state() {
    assert_eq!(evaluate(Pass::pure(7), "state"), Ok(7));
    assert_eq!(execute(Pass::pure(7), "state"), Ok("state"));
}

#[test]
fn test_evaluate_discards_state_execute_discards_value() {
    let pass = || modify(|n: &mut u32| *n += 1).then(gets(|n: &u32| *n * 10));
    assert_eq!(evaluate(pass(), 4), Ok(50));
    assert_eq!(execute(pass(), 4), Ok(5));
}

#[test]
fn test_get_and_put() {
    let swap = get::<String>().and_then(|old| put(format!("{old}!")).map(move |()| old));
    assert_eq!(evaluate(swap, String::from("hi")), Ok(String::from("hi")));

    let swap = get::<String>().and_then(|old| put(format!("{old}!")));
    assert_eq!(execute(swap, String::from("hi")), Ok(String::from("hi!")));
}

#[test]
fn test_map_transforms_value() {
    let pass = gets(|v: &Vec<i32>| v.len()).map(|len| len * 2);
    assert_eq!(evaluate(pass, vec![1, 2, 3]), Ok(6));
}

#[test]
fn test_first_error_stops_remaining_steps() {
    let ran = Cell::new(false);
    let pass = Pass::<u32, ()>::fail(PassError::generic("first"))
        .then(modify(|n: &mut u32| *n += 1))
        .then(Pass::new(|_| {
            ran.set(true);
            Ok(())
        }));

    assert_eq!(evaluate(pass, 0), Err(PassError::generic("first")));
    assert!(!ran.get());
}

#[test]
fn test_error_after_state_change_returns_only_error() {
    let pass = modify(|n: &mut u32| *n = 99).then(Pass::<u32, ()>::fail(PassError::syntax("bad")));
    assert_eq!(execute(pass, 0), Err(PassError::syntax("bad")));
}

#[test]
fn test_and_then_does_not_build_after_failure() {
    let built = Cell::new(false);
    let pass = Pass::<(), u32>::lift(Err(PassError::panic("broken"))).and_then(|n| {
        built.set(true);
        Pass::pure(n + 1)
    });
    assert_eq!(evaluate(pass, ()), Err(PassError::panic("broken")));
    assert!(!built.get());
}

#[test]
fn test_sequence_collects_in_order() {
    let push = |n: i32| modify(move |log: &mut Vec<i32>| log.push(n)).map(move |()| n * n);
    let pass = sequence([push(1), push(2), push(3)]);
    assert_eq!(evaluate(sequence([push(1), push(2)]), Vec::new()), Ok(vec![1, 4]));
    assert_eq!(execute(pass, Vec::new()), Ok(vec![1, 2, 3]));
}

#[test]
fn test_sequence_short_circuits() {
    let steps = Cell::new(0);
    let steps = &steps;
    let count = move || {
        Pass::new(move |_: &mut ()| {
            steps.set(steps.get() + 1);
            Ok(())
        })
    };
    let pass = sequence([count(), Pass::fail(PassError::generic("stop")), count()]);
    assert_eq!(evaluate(pass, ()), Err(PassError::generic("stop")));
    assert_eq!(steps.get(), 1);
}

#[test]
fn test_traverse_builds_lazily() {
    let built = Cell::new(0);
    let pass = traverse([1, 2, 3, 4], |n: i32| {
        built.set(built.get() + 1);
        if n == 2 {
            Pass::fail(PassError::generic("two"))
        } else {
            modify(move |sum: &mut i32| *sum += n)
        }
    });
    assert_eq!(execute(pass, 0), Err(PassError::generic("two")));
    assert_eq!(built.get(), 2);
}

#[test]
fn test_traverse_threads_state() {
    let pass = traverse(["a", "b", "c"], |name| {
        Pass::new(move |next: &mut u32| {
            let label = format!("{name}{next}");
            *next += 1;
            Ok(label)
        })
    });
    assert_eq!(evaluate(pass, 0), Ok(vec!["a0".into(), "b1".into(), "c2".into()]));
}
