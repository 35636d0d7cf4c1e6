use crate::error::{GraphError, Result};

/// Last-in first-out container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Add an entry to the top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top entry
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| GraphError::empty_container("stack"))
    }

    /// Look at the top entry without removing it
    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| GraphError::empty_container("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pop every entry, top first
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..).rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.len(), 3);
        assert_eq!(*stack.peek().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 3);
        assert_eq!(stack.pop().unwrap(), 2);
        stack.push(4);
        assert_eq!(stack.pop().unwrap(), 4);
        assert_eq!(stack.pop().unwrap(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut stack: Stack<char> = Stack::new();
        assert!(matches!(
            stack.pop(),
            Err(GraphError::EmptyContainer { container: "stack" })
        ));
        assert!(matches!(
            stack.peek(),
            Err(GraphError::EmptyContainer { .. })
        ));
    }

    #[test]
    fn test_drain_yields_top_first() {
        let mut stack = Stack::new();
        for label in ["begin", "middle", "end"] {
            stack.push(label);
        }
        let popped: Vec<_> = stack.drain().collect();
        assert_eq!(popped, vec!["end", "middle", "begin"]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.peek().is_err());
    }
}
