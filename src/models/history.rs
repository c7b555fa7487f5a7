use rust_decimal::Decimal;

use super::load::Load;
use crate::window::CalendarWindow;

/// Count and amount of stored loads falling in one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowTotals {
    pub count: usize,
    pub amount: Decimal,
}

/// Accepted loads of one customer, in acceptance order
///
/// Only accepted loads are stored, so rejected ones never count toward a
/// later window. Entries are never modified or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerHistory {
    loads: Vec<Load>,
}

impl CustomerHistory {
    /// Record an accepted load
    pub fn push(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Aggregate every stored load whose timestamp lies in `window`
    ///
    /// Scans the whole history: arrival order is not time order, so a load
    /// accepted later may still belong to an earlier window.
    pub fn totals_within(&self, window: &CalendarWindow) -> WindowTotals {
        self.loads
            .iter()
            .filter(|load| window.contains(load.time))
            .fold(WindowTotals::default(), |totals, load| WindowTotals {
                count: totals.count + 1,
                amount: totals.amount.saturating_add(load.amount),
            })
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
