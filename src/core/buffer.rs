//! Bounded digit storage for a single entry step.

use super::digit::Digit;
use super::session::PASSCODE_LENGTH;
use std::fmt;

/// Ordered sequence of entered digits, bounded at a fixed capacity.
///
/// Every operation is total: pushing onto a full buffer or popping an empty
/// one is absorbed and reported through the return value.
///
/// # Example
///
/// ```rust
/// use passcode::core::{Digit, DigitBuffer};
///
/// let mut buffer = DigitBuffer::with_capacity(2);
/// assert!(buffer.push(Digit::new(1).unwrap()));
/// assert!(buffer.push(Digit::new(2).unwrap()));
/// assert!(!buffer.push(Digit::new(3).unwrap()));
/// assert!(buffer.is_full());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    digits: Vec<Digit>,
    capacity: usize,
}

impl DigitBuffer {
    /// Create an empty buffer holding at most `capacity` digits.
    ///
    /// Storage grows on demand past the default passcode length.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            digits: Vec::with_capacity(capacity.min(PASSCODE_LENGTH)),
            capacity,
        }
    }

    /// Append a digit. Returns `false` if the buffer was already full.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.digits.push(digit);
        true
    }

    /// Remove the last digit, if any.
    pub fn pop(&mut self) -> Option<Digit> {
        self.digits.pop()
    }

    /// Remove all digits. Returns `false` if there was nothing to remove.
    pub fn clear(&mut self) -> bool {
        let had_digits = !self.digits.is_empty();
        self.digits.clear();
        had_digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.digits.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether both buffers hold the same digits in the same order.
    pub fn matches(&self, other: &DigitBuffer) -> bool {
        self.digits == other.digits
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitBuffer")
            .field("len", &self.digits.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
