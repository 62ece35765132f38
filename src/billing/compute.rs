//! The billing comparison itself: one pure pass over the input record.

use super::tariff::{GRID_USAGE_COST_FACTOR, GRID_USAGE_TARIFF_NOMINAL, UTILITY_TARIFF};
use super::types::{BillingComparison, QuoteInput};

/// Computes the side-by-side billing comparison for one quote.
///
/// Deterministic and side-effect free; identical inputs produce
/// identical output. Defined for every input satisfying the record's
/// constraints — negative values are a caller-side validation failure
/// and are not handled here.
///
/// # Arguments
///
/// * `input` - Validated quote input (consumption, lighting fee,
///   connection type, contracted discount)
///
/// # Returns
///
/// A [`BillingComparison`] with every derived figure populated.
pub fn compute(input: &QuoteInput) -> BillingComparison {
    let minimum_billable_kwh = input.connection_type.minimum_billable_kwh();

    // Baseline: what the household pays today.
    let energy_cost_baseline = input.average_consumption_kwh * UTILITY_TARIFF;
    let total_baseline = energy_cost_baseline + input.public_lighting_fee;

    // Only consumption above the availability floor can be supplied by
    // the solar arrangement.
    let offset_kwh = (input.average_consumption_kwh - minimum_billable_kwh).max(0.0);

    // Solar-provider invoice: offset energy at the discounted base tariff.
    let base_energy_tariff = UTILITY_TARIFF - GRID_USAGE_TARIFF_NOMINAL;
    let discounted_tariff = base_energy_tariff * (1.0 - input.contracted_discount_pct / 100.0);
    let gross_energy_value = offset_kwh * base_energy_tariff;
    let solar_invoice = offset_kwh * discounted_tariff;
    let discount_amount = gross_energy_value - solar_invoice;

    // Utility invoice under the arrangement: the floor is always billed
    // at the full tariff, plus the grid-usage fee on compensated energy.
    let availability_charge = minimum_billable_kwh * UTILITY_TARIFF;
    let grid_usage_charge = offset_kwh * GRID_USAGE_COST_FACTOR;
    let utility_invoice = availability_charge + input.public_lighting_fee + grid_usage_charge;

    let total_with_solar = solar_invoice + utility_invoice;
    let savings_amount = total_baseline - total_with_solar;
    let savings_pct = if total_baseline > 0.0 {
        (savings_amount / total_baseline) * 100.0
    } else {
        0.0
    };

    let annual_savings = savings_amount * 12.0;

    // Discount measured against the full, undiscounted utility tariff.
    // Intentionally distinct from the contracted (nominal) percentage.
    let full_tariff_energy_value = offset_kwh * UTILITY_TARIFF;
    let effective_discount_pct = if full_tariff_energy_value > 0.0 {
        ((full_tariff_energy_value - solar_invoice) / full_tariff_energy_value) * 100.0
    } else {
        0.0
    };

    // total_with_solar >= availability_charge, and the floor is at least
    // 30 kWh at a positive tariff, so this never divides by zero.
    let pct_fees = (utility_invoice / total_with_solar) * 100.0;
    let pct_energy = 100.0 - pct_fees;

    BillingComparison {
        minimum_billable_kwh,
        offset_kwh,
        energy_cost_baseline,
        total_baseline,
        base_energy_tariff,
        discounted_tariff,
        gross_energy_value,
        solar_invoice,
        discount_amount,
        availability_charge,
        grid_usage_charge,
        utility_invoice,
        total_with_solar,
        savings_amount,
        savings_pct,
        annual_savings,
        effective_discount_pct,
        pct_energy,
        pct_fees,
    }
}
