pub mod decision;
pub mod history;
pub mod load;

pub use decision::LoadDecision;
pub use history::{CustomerHistory, WindowTotals};
pub use load::{parse_amount, Load, LoadKey};
