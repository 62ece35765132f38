//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::billing::{self, BillingComparison, ConnectionType, QuoteInput};

/// Incoming quote submission.
///
/// Every field is optional at the wire level so an incomplete form can
/// be rejected with a message naming each missing field, instead of
/// failing deserialization on the first one.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Monthly average energy consumption (kWh).
    pub average_consumption_kwh: Option<f64>,
    /// Fixed monthly municipal public-lighting charge.
    pub public_lighting_fee: Option<f64>,
    /// Connection type: `"single-phase"` or `"three-phase"`.
    pub connection_type: Option<ConnectionType>,
    /// Discount percentage contracted with the solar provider.
    pub contracted_discount_pct: Option<f64>,
}

impl QuoteRequest {
    /// Names of the required fields absent from this submission.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.average_consumption_kwh.is_none() {
            missing.push("average_consumption_kwh");
        }
        if self.public_lighting_fee.is_none() {
            missing.push("public_lighting_fee");
        }
        if self.connection_type.is_none() {
            missing.push("connection_type");
        }
        if self.contracted_discount_pct.is_none() {
            missing.push("contracted_discount_pct");
        }
        missing
    }

    /// Converts a complete submission into a [`QuoteInput`].
    ///
    /// Returns `None` when any field is missing; call
    /// [`Self::missing_fields`] for the report.
    pub fn into_input(self) -> Option<QuoteInput> {
        Some(QuoteInput {
            average_consumption_kwh: self.average_consumption_kwh?,
            public_lighting_fee: self.public_lighting_fee?,
            connection_type: self.connection_type?,
            contracted_discount_pct: self.contracted_discount_pct?,
        })
    }
}

/// Computed quote response: the echoed input plus the full comparison.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// The submission this quote was computed from.
    pub input: QuoteInput,
    /// Full billing comparison.
    pub comparison: BillingComparison,
}

/// Fixed regulatory tariff parameters, for the frontend to display.
#[derive(Debug, Serialize)]
pub struct TariffResponse {
    /// Price per kWh charged by the incumbent utility.
    pub utility_tariff: f64,
    /// Nominal wire-usage component of the tariff, per kWh.
    pub grid_usage_tariff_nominal: f64,
    /// Effective grid-usage fee per compensated kWh.
    pub grid_usage_cost_factor: f64,
    /// Availability floor for single-phase connections (kWh).
    pub minimum_billable_kwh_single_phase: f64,
    /// Availability floor for three-phase connections (kWh).
    pub minimum_billable_kwh_three_phase: f64,
}

impl TariffResponse {
    /// Snapshot of the current regulated values.
    pub fn current() -> Self {
        Self {
            utility_tariff: billing::tariff::UTILITY_TARIFF,
            grid_usage_tariff_nominal: billing::tariff::GRID_USAGE_TARIFF_NOMINAL,
            grid_usage_cost_factor: billing::tariff::GRID_USAGE_COST_FACTOR,
            minimum_billable_kwh_single_phase: ConnectionType::SinglePhase.minimum_billable_kwh(),
            minimum_billable_kwh_three_phase: ConnectionType::ThreePhase.minimum_billable_kwh(),
        }
    }
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_converts_to_input() {
        let req = QuoteRequest {
            average_consumption_kwh: Some(480.0),
            public_lighting_fee: Some(48.0),
            connection_type: Some(ConnectionType::ThreePhase),
            contracted_discount_pct: Some(15.0),
        };
        assert!(req.missing_fields().is_empty());
        let input = req.into_input();
        assert_eq!(input.map(|i| i.average_consumption_kwh), Some(480.0));
    }

    #[test]
    fn missing_fields_are_all_named() {
        let req = QuoteRequest {
            average_consumption_kwh: Some(480.0),
            public_lighting_fee: None,
            connection_type: None,
            contracted_discount_pct: None,
        };
        let missing = req.missing_fields();
        assert_eq!(
            missing,
            vec![
                "public_lighting_fee",
                "connection_type",
                "contracted_discount_pct"
            ]
        );
        assert!(req.into_input().is_none());
    }

    #[test]
    fn tariff_snapshot_matches_constants() {
        let t = TariffResponse::current();
        assert_eq!(t.utility_tariff, 1.077);
        assert_eq!(t.grid_usage_tariff_nominal, 0.224272);
        assert_eq!(t.grid_usage_cost_factor, 0.15065);
        assert_eq!(t.minimum_billable_kwh_single_phase, 30.0);
        assert_eq!(t.minimum_billable_kwh_three_phase, 100.0);
    }
}
