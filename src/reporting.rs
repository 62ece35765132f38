//! Plain-text quote report for the CLI.

use crate::billing::{BillingComparison, QuoteInput};

/// Renders the side-by-side savings report as a string.
///
/// The headline shows the monthly savings in currency and percent,
/// followed by the pay-today / pay-with-solar comparison and the exact
/// invoice composition.
pub fn render_quote_report(input: &QuoteInput, cmp: &BillingComparison) -> String {
    let mut out = String::new();

    out.push_str("=== Solar Lease Savings Quote ===\n");
    out.push_str(&format!(
        "Projected monthly savings: {:.2} ({:.1}% less)\n\n",
        cmp.savings_amount, cmp.savings_pct
    ));
    out.push_str(&format!("  Pays today:     {:>10.2}\n", cmp.total_baseline));
    out.push_str(&format!(
        "  Would pay:      {:>10.2}\n\n",
        cmp.total_with_solar
    ));
    out.push_str("Composition with solar:\n");
    out.push_str(&format!(
        "  Solar provider invoice: {:>10.2}\n",
        cmp.solar_invoice
    ));
    out.push_str(&format!(
        "  Utility invoice:        {:>10.2}\n",
        cmp.utility_invoice
    ));
    out.push_str(&format!(
        "Base: consumption {:.0} kWh | availability floor {:.0} kWh ({})\n",
        input.average_consumption_kwh, cmp.minimum_billable_kwh, input.connection_type
    ));
    out.push_str(&format!(
        "Contracted discount {:.1}% | effective vs full tariff {:.1}%\n",
        input.contracted_discount_pct, cmp.effective_discount_pct
    ));
    out
}

/// Prints the quote report to stdout.
pub fn print_quote_report(input: &QuoteInput, cmp: &BillingComparison) {
    print!("{}", render_quote_report(input, cmp));
}
