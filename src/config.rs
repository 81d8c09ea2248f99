//! Array configuration parameters.

use crate::types::GrowthPolicy;
use crate::types::PaddingPolicy;

/// Configuration used when creating an array.
///
/// The growth and padding policies can still be changed on a live array;
/// the change only affects later growth.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front. Must be at least one.
    pub initial_capacity: usize,

    /// Growth rule used when no explicit size is requested.
    pub growth: GrowthPolicy,

    /// Slack added on top of an explicitly requested growth.
    pub padding: PaddingPolicy,

    /// Panic with the error message whenever an operation fails.
    ///
    /// The error is still recorded as the array's last error first.
    pub panic_on_error: bool,
}

impl ArrayConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 100;

    /// Creates a config with the given initial capacity and defaults
    /// for everything else.
    pub const fn new(initial_capacity: usize) -> Self {
        return Self {
            initial_capacity: initial_capacity,
            growth:           GrowthPolicy::FivePercent,
            padding:          PaddingPolicy::Ten,
            panic_on_error:   false,
        };
    }

    pub const fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        return self;
    }

    pub const fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        return self;
    }

    pub const fn with_panic_on_error(mut self, panic_on_error: bool) -> Self {
        self.panic_on_error = panic_on_error;
        return self;
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        return Self::new(Self::DEFAULT_INITIAL_CAPACITY);
    }
}
