//! Fixed regulatory tariff parameters.
//!
//! These are incumbent-utility constants, not user input. They change
//! only with a tariff review, at which point the values below are
//! updated in place.

/// Price per kWh charged by the incumbent utility.
pub const UTILITY_TARIFF: f64 = 1.077;

/// Nominal "wire usage" (Fio B) component of the utility tariff, per kWh.
pub const GRID_USAGE_TARIFF_NOMINAL: f64 = 0.224272;

/// Effective fraction of the utility tariff charged as a grid-usage fee
/// on each kWh of compensated energy.
pub const GRID_USAGE_COST_FACTOR: f64 = 0.15065;

/// Availability floor for single-phase connections (kWh).
pub const MINIMUM_BILLABLE_KWH_SINGLE_PHASE: f64 = 30.0;

/// Availability floor for three-phase connections (kWh).
pub const MINIMUM_BILLABLE_KWH_THREE_PHASE: f64 = 100.0;
