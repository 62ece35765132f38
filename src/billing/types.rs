//! Core billing types: quote input record and the computed comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tariff;

/// Electrical connection type of the household.
///
/// Determines the minimum consumption the utility always bills
/// (availability floor), regardless of how much energy the solar
/// arrangement supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionType {
    /// Single-phase connection, 30 kWh availability floor.
    SinglePhase,
    /// Three-phase connection, 100 kWh availability floor.
    ThreePhase,
}

impl ConnectionType {
    /// Minimum consumption (kWh) the utility bills for this connection
    /// type even when solar covers everything above it.
    pub fn minimum_billable_kwh(self) -> f64 {
        match self {
            Self::SinglePhase => tariff::MINIMUM_BILLABLE_KWH_SINGLE_PHASE,
            Self::ThreePhase => tariff::MINIMUM_BILLABLE_KWH_THREE_PHASE,
        }
    }

    /// Wire/CLI label for this connection type.
    pub fn label(self) -> &'static str {
        match self {
            Self::SinglePhase => "single-phase",
            Self::ThreePhase => "three-phase",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ConnectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-phase" => Ok(Self::SinglePhase),
            "three-phase" => Ok(Self::ThreePhase),
            other => Err(format!(
                "unknown connection type \"{other}\", expected \"single-phase\" or \"three-phase\""
            )),
        }
    }
}

/// Complete, validated input for one savings quote.
///
/// All four fields are required; the caller (config layer, CLI, or API)
/// rejects incomplete submissions before constructing this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteInput {
    /// Monthly average energy consumption (kWh, >= 0).
    pub average_consumption_kwh: f64,
    /// Fixed monthly municipal public-lighting charge (currency, >= 0).
    pub public_lighting_fee: f64,
    /// Electrical connection type.
    pub connection_type: ConnectionType,
    /// Discount percentage contracted with the solar provider (0–100).
    pub contracted_discount_pct: f64,
}

/// Side-by-side billing comparison computed from one [`QuoteInput`].
///
/// Every field is recomputed fresh on each invocation; nothing is
/// cached or carried between quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingComparison {
    /// Availability floor applied for the input's connection type (kWh).
    pub minimum_billable_kwh: f64,
    /// Consumption above the floor, suppliable by the solar arrangement
    /// (kWh, clamped at 0).
    pub offset_kwh: f64,

    /// Energy cost on the current tariff, before the lighting fee.
    pub energy_cost_baseline: f64,
    /// Total monthly bill without solar.
    pub total_baseline: f64,

    /// Utility tariff minus the nominal grid-usage component (per kWh).
    pub base_energy_tariff: f64,
    /// Base energy tariff after the contracted discount (per kWh).
    pub discounted_tariff: f64,
    /// Offset energy valued at the undiscounted base tariff.
    pub gross_energy_value: f64,
    /// Monthly invoice from the solar provider.
    pub solar_invoice: f64,
    /// Amount the contracted discount removes from the gross energy value.
    pub discount_amount: f64,

    /// Availability floor billed at the full utility tariff.
    pub availability_charge: f64,
    /// Grid-usage fee charged on the offset energy.
    pub grid_usage_charge: f64,
    /// Monthly utility invoice under the solar arrangement.
    pub utility_invoice: f64,

    /// Total monthly bill with solar (provider + utility invoices).
    pub total_with_solar: f64,
    /// Monthly savings: `total_baseline - total_with_solar`.
    pub savings_amount: f64,
    /// Savings as a percentage of the baseline bill (0 when baseline is 0).
    pub savings_pct: f64,
    /// Projected savings over twelve months.
    pub annual_savings: f64,
    /// Real discount measured against the full utility tariff, which is
    /// larger than the contracted (nominal) discount against the reduced
    /// base tariff. Both are part of the output contract.
    pub effective_discount_pct: f64,
    /// Share of the with-solar total paid for energy.
    pub pct_energy: f64,
    /// Share of the with-solar total paid in utility fees.
    pub pct_fees: f64,
}

impl fmt::Display for BillingComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Billing Comparison ---")?;
        writeln!(
            f,
            "Without solar:       {:>10.2}  (energy {:.2} + lighting {:.2})",
            self.total_baseline,
            self.energy_cost_baseline,
            self.total_baseline - self.energy_cost_baseline
        )?;
        writeln!(
            f,
            "With solar:          {:>10.2}  (provider {:.2} + utility {:.2})",
            self.total_with_solar, self.solar_invoice, self.utility_invoice
        )?;
        writeln!(
            f,
            "Monthly savings:     {:>10.2}  ({:.1}% less)",
            self.savings_amount, self.savings_pct
        )?;
        writeln!(f, "Annual savings:      {:>10.2}", self.annual_savings)?;
        writeln!(
            f,
            "Offset energy:       {:>10.2} kWh (floor {:.0} kWh)",
            self.offset_kwh, self.minimum_billable_kwh
        )?;
        writeln!(
            f,
            "Utility invoice:     availability {:.2} + grid usage {:.2}",
            self.availability_charge, self.grid_usage_charge
        )?;
        writeln!(
            f,
            "Effective discount:  {:>9.1}% vs full tariff",
            self.effective_discount_pct
        )?;
        write!(
            f,
            "Bill composition:    {:.1}% energy / {:.1}% fees",
            self.pct_energy, self.pct_fees
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_billable_floor_per_connection_type() {
        assert_eq!(ConnectionType::SinglePhase.minimum_billable_kwh(), 30.0);
        assert_eq!(ConnectionType::ThreePhase.minimum_billable_kwh(), 100.0);
    }

    #[test]
    fn connection_type_parses_documented_labels() {
        assert_eq!(
            "single-phase".parse::<ConnectionType>(),
            Ok(ConnectionType::SinglePhase)
        );
        assert_eq!(
            "three-phase".parse::<ConnectionType>(),
            Ok(ConnectionType::ThreePhase)
        );
    }

    #[test]
    fn connection_type_rejects_unknown_label() {
        let err = "biphase".parse::<ConnectionType>();
        assert!(err.is_err());
        assert!(err.unwrap_err().contains("unknown connection type"));
    }

    #[test]
    fn connection_type_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ConnectionType::ThreePhase).unwrap();
        assert_eq!(json, "\"three-phase\"");
        let back: ConnectionType = serde_json::from_str("\"single-phase\"").unwrap();
        assert_eq!(back, ConnectionType::SinglePhase);
    }

    #[test]
    fn display_label_round_trips() {
        for ct in [ConnectionType::SinglePhase, ConnectionType::ThreePhase] {
            assert_eq!(ct.to_string().parse::<ConnectionType>(), Ok(ct));
        }
    }

    #[test]
    fn comparison_display_does_not_panic() {
        let input = QuoteInput {
            average_consumption_kwh: 480.0,
            public_lighting_fee: 48.0,
            connection_type: ConnectionType::ThreePhase,
            contracted_discount_pct: 15.0,
        };
        let cmp = crate::billing::compute(&input);
        let s = format!("{cmp}");
        assert!(s.contains("Billing Comparison"));
        assert!(s.contains("Monthly savings"));
    }
}
