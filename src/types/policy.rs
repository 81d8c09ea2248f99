/// How much to grow when no explicit size was asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// Grow by 5% of the current capacity.
    #[default]
    FivePercent,
    /// Grow by 10% of the current capacity.
    TenPercent,
}

impl GrowthPolicy {
    /// Number of slots to add to an array of `capacity` slots. Never less than one.
    pub const fn step(self, capacity: usize) -> usize {
        let pct = match self {
            GrowthPolicy::FivePercent => 5,
            GrowthPolicy::TenPercent => 10,
        };
        let step = capacity.saturating_mul(pct) / 100;
        if step == 0 {
            return 1;
        }
        return step;
    }
}

/// Extra slots added on top of an explicitly requested growth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PaddingPolicy {
    #[default]
    Ten,
    Hundred,
    Thousand,
}

impl PaddingPolicy {
    pub const fn slots(self) -> usize {
        match self {
            PaddingPolicy::Ten => 10,
            PaddingPolicy::Hundred => 100,
            PaddingPolicy::Thousand => 1000,
        }
    }
}
