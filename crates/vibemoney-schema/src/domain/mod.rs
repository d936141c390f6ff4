mod fiscal;
mod interval;
mod limit;
mod symbol;

pub use fiscal::FiscalPeriod;
pub use interval::Interval;
pub use limit::{Limit, LimitBounds};
pub use symbol::Symbol;
