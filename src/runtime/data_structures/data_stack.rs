use crate::runtime::error::{self, ScriptError};
use std::fmt::{self, Display, Formatter};

/// The Forth truth value.
pub const TRUE: i64 = -1;

/// The Forth false value.
pub const FALSE: i64 = 0;

/// Convert a Rust boolean into a Forth flag.
pub fn flag(value: bool) -> i64 {
    if value { TRUE } else { FALSE }
}

/// Only TRUE counts as true, every other value is false.
pub fn is_true(value: i64) -> bool {
    value == TRUE
}

/// The last-in first-out stack of integers manipulated by words.
///
/// Operations that need several values check the depth before touching the stack, so a failed
/// operation never leaves half of its operands popped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataStack {
    items: Vec<i64>,
}

/// Formats as `<depth> a b c ` with the deepest value first, the way `.S` shows it.
impl Display for DataStack {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<{}> ", self.items.len())?;

        for item in self.items.iter() {
            write!(f, "{} ", item)?;
        }

        Ok(())
    }
}

impl DataStack {
    pub fn new() -> DataStack {
        DataStack {
            items: Vec::with_capacity(20),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stack contents, deepest value first.
    pub fn items(&self) -> &[i64] {
        &self.items
    }

    pub fn push(&mut self, value: i64) {
        self.items.push(value);
    }

    /// Make sure at least `needed` values are on the stack.
    pub fn require(&self, needed: usize) -> error::Result<()> {
        if self.items.len() < needed {
            return Err(ScriptError::StackUnderflow {
                needed,
                depth: self.items.len(),
            });
        }

        Ok(())
    }

    pub fn pop(&mut self) -> error::Result<i64> {
        let [value] = self.pop_n()?;
        Ok(value)
    }

    /// Copy of the top value.
    pub fn peek(&self) -> error::Result<i64> {
        let [value] = self.peek_n()?;
        Ok(value)
    }

    /// Copy the top `N` values without removing them.  The values come back in stack order, so the
    /// last element of the array is the top of the stack.
    pub fn peek_n<const N: usize>(&self) -> error::Result<[i64; N]> {
        self.require(N)?;

        let mut values = [0; N];
        values.copy_from_slice(&self.items[self.items.len() - N..]);

        Ok(values)
    }

    /// Remove the top `N` values, all or nothing.  The values come back in stack order, so the
    /// last element of the array was the top of the stack.
    pub fn pop_n<const N: usize>(&mut self) -> error::Result<[i64; N]> {
        let values = self.peek_n::<N>()?;
        self.items.truncate(self.items.len() - N);

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_n_keeps_stack_order() {
        let mut stack = DataStack::new();

        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop_n::<2>().unwrap(), [2, 3]);
        assert_eq!(stack.items(), &[1]);
    }

    #[test]
    fn underflow_leaves_stack_untouched() {
        let mut stack = DataStack::new();

        stack.push(7);

        let result = stack.pop_n::<2>();

        assert!(matches!(
            result,
            Err(ScriptError::StackUnderflow {
                needed: 2,
                depth: 1
            })
        ));
        assert_eq!(stack.items(), &[7]);
    }

    #[test]
    fn only_minus_one_is_true() {
        assert!(is_true(TRUE));
        assert!(!is_true(FALSE));
        assert!(!is_true(1));
    }

    #[test]
    fn display_is_deepest_first() {
        let mut stack = DataStack::new();

        assert_eq!(stack.to_string(), "<0> ");

        stack.push(1);
        stack.push(-2);

        assert_eq!(stack.to_string(), "<2> 1 -2 ");
    }
}
