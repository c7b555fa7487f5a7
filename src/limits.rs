use rust_decimal::Decimal;

/// Per-customer velocity limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VelocityLimits {
    /// Maximum cumulative amount accepted in one calendar day
    pub day_max_amount: Decimal,
    /// Maximum number of loads accepted in one calendar day
    pub day_max_count: usize,
    /// Maximum cumulative amount accepted in one calendar week
    pub week_max_amount: Decimal,
}

impl VelocityLimits {
    pub const DEFAULT_DAY_MAX_AMOUNT: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);
    pub const DEFAULT_DAY_MAX_COUNT: usize = 3;
    pub const DEFAULT_WEEK_MAX_AMOUNT: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);
}

impl Default for VelocityLimits {
    fn default() -> Self {
        Self {
            day_max_amount: Self::DEFAULT_DAY_MAX_AMOUNT,
            day_max_count: Self::DEFAULT_DAY_MAX_COUNT,
            week_max_amount: Self::DEFAULT_WEEK_MAX_AMOUNT,
        }
    }
}
