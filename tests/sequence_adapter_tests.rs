//! Integration tests for the Stack and Queue adapters.

use rbcontainers::sequence::{FrontSequence, Queue, Sequence, Stack};
use rstest::rstest;
use std::collections::{LinkedList, VecDeque};

// =============================================================================
// Sequence Trait Tests
// =============================================================================

fn exercise_sequence<C: Sequence<i32> + Default>() {
    let mut sequence = C::default();
    assert!(sequence.is_empty());
    sequence.push_back(1);
    sequence.push_back(2);
    assert_eq!(sequence.front(), Some(&1));
    assert_eq!(sequence.back(), Some(&2));
    assert_eq!(sequence.pop_back(), Some(2));
    assert_eq!(sequence.len(), 1);
}

fn exercise_front_sequence<C: FrontSequence<i32> + Default>() {
    let mut sequence = C::default();
    sequence.push_back(1);
    sequence.push_back(2);
    assert_eq!(sequence.pop_front(), Some(1));
    assert_eq!(sequence.pop_front(), Some(2));
    assert_eq!(sequence.pop_front(), None);
}

#[rstest]
fn test_sequence_implementations() {
    exercise_sequence::<Vec<i32>>();
    exercise_sequence::<VecDeque<i32>>();
    exercise_sequence::<LinkedList<i32>>();
    exercise_front_sequence::<VecDeque<i32>>();
    exercise_front_sequence::<LinkedList<i32>>();
}

// =============================================================================
// Stack Tests
// =============================================================================

#[rstest]
fn test_stack_is_lifo() {
    let mut stack: Stack<i32> = Stack::new();
    for value in 1..=3 {
        stack.push(value);
    }
    assert_eq!(stack.top(), Some(&3));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[rstest]
fn test_stack_backed_by_deque() {
    let mut stack: Stack<&str, VecDeque<&str>> = ["a", "b"].into_iter().collect();
    assert_eq!(stack.pop(), Some("b"));
    assert_eq!(stack.into_inner(), VecDeque::from(["a"]));
}

#[rstest]
fn test_stack_swap_and_clone() {
    let mut first: Stack<i32> = (1..=2).collect();
    let mut second: Stack<i32> = Stack::default();
    first.swap(&mut second);
    assert!(first.is_empty());

    let copy = second.clone();
    assert_eq!(second.pop(), Some(2));
    assert_eq!(copy.top(), Some(&2));
    assert_eq!(format!("{copy:?}"), "Stack { container: [1, 2] }");
}

// =============================================================================
// Queue Tests
// =============================================================================

#[rstest]
fn test_queue_is_fifo() {
    let mut queue: Queue<i32> = Queue::new();
    for value in 1..=3 {
        queue.push(value);
    }
    assert_eq!(queue.front(), Some(&1));
    assert_eq!(queue.back(), Some(&3));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.len(), 1);
}

#[rstest]
#[case::deque(Queue::<i32>::new())]
fn test_queue_empty_is_none(#[case] mut queue: Queue<i32>) {
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.front(), None);
    assert!(queue.is_empty());
}

#[rstest]
fn test_queue_backed_by_linked_list() {
    let mut queue: Queue<char, LinkedList<char>> = "abc".chars().collect();
    assert_eq!(queue.pop(), Some('a'));
    let mut other: Queue<char, LinkedList<char>> = Queue::default();
    queue.swap(&mut other);
    assert!(queue.is_empty());
    assert_eq!(other.front(), Some(&'b'));
    assert_eq!(format!("{other:?}"), "Queue { container: ['b', 'c'] }");
}
