//! # Stack
//!
//! A generic LIFO container.
//!
//! ```text
//!   push(1)  push(2)  pop() → 2   pop() → 1   pop() → Err(Empty)
//!   ┌───┐    ┌───┐    ┌───┐       ┌───┐       ┌───┐
//!   │   │    │ 2 │◄top│   │       │   │       │   │
//!   │ 1 │◄top│ 1 │    │ 1 │◄top   │   │       │   │
//!   └───┘    └───┘    └───┘       └───┘       └───┘
//! ```
//!
//! Each `Stack` owns its storage; clearing one never affects another.

use crate::error::StackError;

/// Last-in, first-out storage for any `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes `item` as the new top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Errors
    /// [`StackError::Empty`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    ///
    /// ## Errors
    /// [`StackError::Empty`] when there is nothing to peek at.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Number of items currently stored.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item. Calling it on an empty stack is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_increases_size() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_pop_returns_items_in_reverse_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.size(), 1);
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_fails() {
        let mut stack: Stack<i32> = Stack::new();
        let err = stack.pop().unwrap_err();
        assert_eq!(err, StackError::Empty);
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(3);
        stack.push(4);

        assert_eq!(stack.peek(), Ok(&4));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_peek_on_empty_stack_fails() {
        let stack: Stack<&str> = Stack::new();
        assert_eq!(stack.peek(), Err(StackError::Empty));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push("a");
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_size_after_pop() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        stack.pop().unwrap();
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_clear_is_idempotent_and_per_instance() {
        let mut first = Stack::new();
        let mut second = Stack::new();
        first.push(1);
        first.push(2);
        first.push(3);
        first.pop().unwrap();
        second.push(9);

        first.clear();
        assert_eq!(first.size(), 0);
        first.clear();
        assert_eq!(first.size(), 0);

        assert_eq!(second.size(), 1);
        assert_eq!(second.peek(), Ok(&9));
    }

    #[test]
    fn test_holds_non_copy_values() {
        let mut stack = Stack::default();
        stack.push(String::from("first"));
        stack.push(String::from("second"));
        assert_eq!(stack.pop().unwrap(), "second");
        assert_eq!(stack.peek().unwrap(), "first");
    }
}
