//! Solar-lease savings quote engine.
//!
//! Compares a household's current utility bill against the projected
//! bill under a solar-energy-sharing (leasing) arrangement and reports
//! the monthly savings and the full cost breakdown.

pub mod billing;
pub mod config;
pub mod io;
pub mod reporting;

#[cfg(feature = "api")]
pub mod api;
