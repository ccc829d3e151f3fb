// deskbits - core/counter.rs
//
// Click counter backing the Push Counter window.

/// A non-negative click counter.
///
/// Invariant: `value()` equals the initial value plus the number of
/// `increment()` calls since construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    /// Create a counter starting at `start`.
    pub fn new(start: u64) -> Self {
        Self { count: start }
    }

    /// Record one activation.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Current count.
    pub fn value(&self) -> u64 {
        self.count
    }

    /// Decimal string shown in the window.
    pub fn display(&self) -> String {
        self.count.to_string()
    }
}
