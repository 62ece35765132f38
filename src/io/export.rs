//! CSV export for a computed billing comparison.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::billing::BillingComparison;

/// Schema v1 column header for CSV quote export.
const HEADER: &str = "minimum_billable_kwh,offset_kwh,energy_cost_baseline,total_baseline,\
                      base_energy_tariff,discounted_tariff,gross_energy_value,solar_invoice,\
                      discount_amount,availability_charge,grid_usage_charge,utility_invoice,\
                      total_with_solar,savings_amount,savings_pct,annual_savings,\
                      effective_discount_pct,pct_energy,pct_fees";

/// Exports a billing comparison to a CSV file at the given path.
///
/// Writes the schema v1 header followed by one data row. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(cmp: &BillingComparison, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(cmp, buf)
}

/// Writes a billing comparison as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(cmp: &BillingComparison, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;
    wtr.write_record(&[
        format!("{:.4}", cmp.minimum_billable_kwh),
        format!("{:.4}", cmp.offset_kwh),
        format!("{:.4}", cmp.energy_cost_baseline),
        format!("{:.4}", cmp.total_baseline),
        format!("{:.6}", cmp.base_energy_tariff),
        format!("{:.6}", cmp.discounted_tariff),
        format!("{:.4}", cmp.gross_energy_value),
        format!("{:.4}", cmp.solar_invoice),
        format!("{:.4}", cmp.discount_amount),
        format!("{:.4}", cmp.availability_charge),
        format!("{:.4}", cmp.grid_usage_charge),
        format!("{:.4}", cmp.utility_invoice),
        format!("{:.4}", cmp.total_with_solar),
        format!("{:.4}", cmp.savings_amount),
        format!("{:.4}", cmp.savings_pct),
        format!("{:.4}", cmp.annual_savings),
        format!("{:.4}", cmp.effective_discount_pct),
        format!("{:.4}", cmp.pct_energy),
        format!("{:.4}", cmp.pct_fees),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{ConnectionType, QuoteInput, compute};

    fn make_comparison() -> BillingComparison {
        compute(&QuoteInput {
            average_consumption_kwh: 480.0,
            public_lighting_fee: 48.0,
            connection_type: ConnectionType::ThreePhase,
            contracted_discount_pct: 15.0,
        })
    }

    #[test]
    fn header_matches_schema_v1() {
        let cmp = make_comparison();
        let mut buf = Vec::new();
        write_csv(&cmp, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert!(first_line.starts_with("minimum_billable_kwh,offset_kwh,"));
        assert!(first_line.ends_with("pct_energy,pct_fees"));
        assert_eq!(first_line.split(',').count(), 19);
    }

    #[test]
    fn single_data_row_follows_header() {
        let cmp = make_comparison();
        let mut buf = Vec::new();
        write_csv(&cmp, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn deterministic_output() {
        let cmp = make_comparison();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&cmp, &mut buf1).ok();
        write_csv(&cmp, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn every_column_parses_as_f64() {
        let cmp = make_comparison();
        let mut buf = Vec::new();
        write_csv(&cmp, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(19));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "row should parse");
            for (i, field) in rec.iter().flat_map(|r| r.iter()).enumerate() {
                let val: Result<f64, _> = field.parse();
                assert!(val.is_ok(), "column {i} should parse as f64");
            }
            row_count += 1;
        }
        assert_eq!(row_count, 1);
    }
}
