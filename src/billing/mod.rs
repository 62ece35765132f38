//! Billing comparison core: input/output records, tariff constants, and
//! the pure computation that turns one into the other.

mod compute;
pub mod tariff;
mod types;

pub use compute::compute;
pub use types::{BillingComparison, ConnectionType, QuoteInput};
