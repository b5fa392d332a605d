//! Core domain types.

mod cashflow;
mod instant;
mod rate;

pub use cashflow::{CashFlow, CashFlowSeries};
pub use instant::Instant;
pub use rate::Rate;
