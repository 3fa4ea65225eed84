use std::collections::VecDeque;

use seqsort::{GrowableSequence, Sequence};

#[test]
fn std_methods_stay_zero_based() {
    // With both accessor traits in scope the 0-based std methods must still be the ones called.
    let mut v = vec![10, 20, 30];
    v.swap(0, 1);
    assert_eq!(v, [20, 10, 30]);
    assert_eq!(v.get(0), Some(&20));
    v.push(40);
    assert_eq!(v.pop(), Some(40));

    let mut deque = VecDeque::from(vec![10, 20, 30]);
    deque.swap(0, 2);
    assert_eq!(deque, [30, 20, 10]);
    assert_eq!(deque.get(0), Some(&30));

    let mut arr = [10, 20, 30];
    let slice = &mut arr[..];
    slice.swap(1, 2);
    assert_eq!(slice.get(0), Some(&10));
    assert_eq!(arr, [10, 30, 20]);
}

#[test]
fn accessor_is_one_based() {
    let mut v = vec!['a', 'b', 'c'];
    assert_eq!(v.border(), 3);
    assert_eq!(*v.get_at(1), 'a');
    assert_eq!(*v.get_at(3), 'c');
    v.swap_at(1, 3);
    assert_eq!(v, ['c', 'b', 'a']);

    let mut deque = VecDeque::from(vec!['a', 'b', 'c']);
    deque.rotate_left(1);
    assert_eq!(*deque.get_at(1), 'b');
    deque.swap_at(1, 3);
    assert_eq!(deque, ['a', 'c', 'b']);

    let mut arr = ['a', 'b', 'c'];
    let slice = &mut arr[..];
    assert_eq!(slice.border(), 3);
    slice.swap_at(2, 3);
    assert_eq!(arr, ['a', 'c', 'b']);
}

#[test]
fn set_at_returns_the_previous_value() {
    let mut v = vec![String::from("x"), String::from("y")];
    assert_eq!(v.set_at(2, String::from("z")), "y");
    assert_eq!(v, ["x", "z"]);

    let mut deque = VecDeque::from(vec![1, 2, 3]);
    deque.push_front(0);
    assert_eq!(deque.set_at(1, 9), 0);
    assert_eq!(deque.set_at(4, 7), 3);
    assert_eq!(deque, [9, 1, 2, 7]);

    let mut arr = [5, 6];
    assert_eq!(arr[..].set_at(1, 4), 5);
    assert_eq!(arr, [4, 6]);
}

#[test]
fn growable_works_at_the_border() {
    let mut deque: VecDeque<i32> = VecDeque::new();
    GrowableSequence::push(&mut deque, 1);
    GrowableSequence::push(&mut deque, 2);
    assert_eq!(deque.border(), 2);
    assert_eq!(*deque.get_at(2), 2);
    assert_eq!(GrowableSequence::pop(&mut deque), Some(2));
    assert_eq!(deque.border(), 1);
}
