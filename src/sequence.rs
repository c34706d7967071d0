//! LIFO and FIFO adapters over linear sequence containers.
//!
//! [`Stack`] and [`Queue`] do no storage work of their own. They forward to a
//! backing container chosen through a type parameter, which only has to
//! implement [`Sequence`] (and [`FrontSequence`] for the queue).
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use rbcontainers::sequence::{Queue, Stack};
//!
//! let mut stack: Stack<i32> = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//!
//! let mut queue: Queue<i32, LinkedList<i32>> = Queue::new();
//! queue.push(1);
//! queue.push(2);
//! assert_eq!(queue.pop(), Some(1));
//! ```

use std::collections::{LinkedList, VecDeque};
use std::fmt;
use std::marker::PhantomData;
use std::mem;

// =============================================================================
// Sequence Traits
// =============================================================================

/// A linear container that grows and shrinks at its back.
pub trait Sequence<T> {
    /// Appends an element at the back.
    fn push_back(&mut self, element: T);

    /// Removes the last element.
    fn pop_back(&mut self) -> Option<T>;

    /// Returns the first element.
    fn front(&self) -> Option<&T>;

    /// Returns the last element.
    fn back(&self) -> Option<&T>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Sequence`] that can also shrink at its front.
pub trait FrontSequence<T>: Sequence<T> {
    /// Removes the first element.
    fn pop_front(&mut self) -> Option<T>;
}

impl<T> Sequence<T> for Vec<T> {
    fn push_back(&mut self, element: T) {
        self.push(element);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn front(&self) -> Option<&T> {
        self.first()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    fn pop_back(&mut self) -> Option<T> {
        Self::pop_back(self)
    }

    fn front(&self) -> Option<&T> {
        Self::front(self)
    }

    fn back(&self) -> Option<&T> {
        Self::back(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> FrontSequence<T> for VecDeque<T> {
    fn pop_front(&mut self) -> Option<T> {
        Self::pop_front(self)
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    fn pop_back(&mut self) -> Option<T> {
        Self::pop_back(self)
    }

    fn front(&self) -> Option<&T> {
        Self::front(self)
    }

    fn back(&self) -> Option<&T> {
        Self::back(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> FrontSequence<T> for LinkedList<T> {
    fn pop_front(&mut self) -> Option<T> {
        Self::pop_front(self)
    }
}

// =============================================================================
// Stack
// =============================================================================

/// A last-in, first-out adapter.
///
/// Operations on an empty stack return `None` instead of failing.
pub struct Stack<T, C = Vec<T>> {
    container: C,
    element: PhantomData<T>,
}

impl<T, C: Sequence<T> + Default> Stack<T, C> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: Sequence<T>> Stack<T, C> {
    /// Wraps an existing container; its back is the top of the stack.
    pub const fn from_container(container: C) -> Self {
        Self {
            container,
            element: PhantomData,
        }
    }

    /// Pushes `element` on top.
    pub fn push(&mut self, element: T) {
        self.container.push_back(element);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    /// Returns the top element.
    pub fn top(&self) -> Option<&T> {
        self.container.back()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Exchanges the contents of two stacks.
    pub const fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.container, &mut other.container);
    }

    /// Unwraps the backing container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C: Sequence<T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            element: PhantomData,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Stack<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

/// Elements are pushed in iteration order, so the last one ends on top.
impl<T, C: Sequence<T> + Default> FromIterator<T> for Stack<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for element in iter {
            stack.push(element);
        }
        stack
    }
}

// =============================================================================
// Queue
// =============================================================================

/// A first-in, first-out adapter.
///
/// Operations on an empty queue return `None` instead of failing.
pub struct Queue<T, C = VecDeque<T>> {
    container: C,
    element: PhantomData<T>,
}

impl<T, C: FrontSequence<T> + Default> Queue<T, C> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: FrontSequence<T>> Queue<T, C> {
    /// Wraps an existing container; its front is the head of the queue.
    pub const fn from_container(container: C) -> Self {
        Self {
            container,
            element: PhantomData,
        }
    }

    /// Appends `element` at the back.
    pub fn push(&mut self, element: T) {
        self.container.push_back(element);
    }

    /// Removes and returns the front element.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_front()
    }

    /// Returns the front element.
    pub fn front(&self) -> Option<&T> {
        self.container.front()
    }

    /// Returns the back element.
    pub fn back(&self) -> Option<&T> {
        self.container.back()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Exchanges the contents of two queues.
    pub const fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.container, &mut other.container);
    }

    /// Unwraps the backing container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<T, C: FrontSequence<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            element: PhantomData,
        }
    }
}

impl<T, C: fmt::Debug> fmt::Debug for Queue<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, C: FrontSequence<T> + Default> FromIterator<T> for Queue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for element in iter {
            queue.push(element);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_vec_sequence_ends() {
        let mut vec = vec![1, 2];
        Sequence::push_back(&mut vec, 3);
        assert_eq!(Sequence::front(&vec), Some(&1));
        assert_eq!(Sequence::back(&vec), Some(&3));
        assert_eq!(Sequence::pop_back(&mut vec), Some(3));
        assert_eq!(Sequence::len(&vec), 2);
    }

    #[rstest]
    fn test_empty_adapters_return_none() {
        let mut stack: Stack<i32> = Stack::new();
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
    }

    #[rstest]
    fn test_stack_over_linked_list() {
        let mut stack: Stack<i32, LinkedList<i32>> = (1..=3).collect();
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.len(), 2);
    }
}
