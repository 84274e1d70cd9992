//! Bounded LIFO stack.
//!
//! An optional capacity limit turns the stack into a rolling history: once
//! it is full, pushing drops the oldest (bottom) element.

use std::collections::VecDeque;

/// A stack with an optional capacity limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
    limit: Option<usize>,
}

impl<T> Stack<T> {
    /// Create an unbounded stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
            limit: None,
        }
    }

    /// Create a stack that never holds more than `limit` elements.
    ///
    /// A limit of 0 keeps the stack permanently empty.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            items: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// The capacity limit, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Push onto the top. Returns the bottom element if it was evicted to
    /// stay within the limit.
    pub fn push(&mut self, element: T) -> Option<T> {
        if self.limit == Some(0) {
            return Some(element);
        }
        self.items.push_back(element);
        match self.limit {
            Some(limit) if self.items.len() > limit => self.items.pop_front(),
            _ => None,
        }
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// The top element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// The element just below the top.
    #[must_use]
    pub fn peek_second(&self) -> Option<&T> {
        self.items.len().checked_sub(2).and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from bottom (oldest) to top (newest).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
