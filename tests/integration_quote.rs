//! Integration tests for the quote pipeline: config → compute → report/export.

use solar_quote::billing::{ConnectionType, QuoteInput, compute};
use solar_quote::config::QuoteConfig;
use solar_quote::io::export::write_csv;
use solar_quote::reporting::render_quote_report;

const EPS: f64 = 1e-9;

fn reference_input() -> QuoteInput {
    QuoteInput {
        average_consumption_kwh: 480.0,
        public_lighting_fee: 48.0,
        connection_type: ConnectionType::ThreePhase,
        contracted_discount_pct: 15.0,
    }
}

#[test]
fn example_preset_reproduces_the_reference_scenario() {
    let cfg = QuoteConfig::from_preset("example").expect("example preset should load");
    let input = cfg.resolve().expect("example preset should be complete");
    assert_eq!(input, reference_input());

    let cmp = compute(&input);
    assert_eq!(cmp.offset_kwh, 380.0);
    assert!((cmp.solar_invoice - 380.0 * (1.077 - 0.224272) * 0.85).abs() < EPS);
    assert!((cmp.utility_invoice - (100.0 * 1.077 + 48.0 + 380.0 * 0.15065)).abs() < EPS);
}

#[test]
fn toml_quote_file_flows_through_to_the_same_result() {
    let toml = r#"
[quote]
average_consumption_kwh = 480.0
public_lighting_fee = 48.0
connection_type = "three-phase"
contracted_discount_pct = 15.0
"#;
    let cfg = QuoteConfig::from_toml_str(toml).expect("quote TOML should parse");
    assert!(cfg.validate().is_empty());
    let input = cfg.resolve().expect("quote should be complete");
    assert_eq!(compute(&input), compute(&reference_input()));
}

#[test]
fn incomplete_quote_file_never_reaches_computation() {
    let toml = r#"
[quote]
average_consumption_kwh = 480.0
connection_type = "three-phase"
"#;
    let cfg = QuoteConfig::from_toml_str(toml).expect("partial TOML should still parse");
    let err = cfg.resolve();
    assert!(err.is_err(), "incomplete input must be a blocking error");
    let msg = err.err().map(|e| e.message).unwrap_or_default();
    assert!(msg.contains("public_lighting_fee"));
    assert!(msg.contains("contracted_discount_pct"));
}

#[test]
fn savings_identity_holds_across_all_presets() {
    for name in QuoteConfig::PRESETS {
        let input = QuoteConfig::from_preset(name)
            .and_then(|c| c.resolve())
            .expect("presets are complete");
        let cmp = compute(&input);
        assert_eq!(
            cmp.savings_amount,
            cmp.total_baseline - cmp.total_with_solar,
            "identity must hold for preset \"{name}\""
        );
        assert!(cmp.offset_kwh >= 0.0);
    }
}

#[test]
fn full_discount_preset_leaves_only_utility_fees() {
    let input = QuoteConfig::from_preset("full_discount")
        .and_then(|c| c.resolve())
        .expect("preset is complete");
    let cmp = compute(&input);
    assert_eq!(cmp.solar_invoice, 0.0);
    assert_eq!(cmp.total_with_solar, cmp.utility_invoice);
    assert_eq!(cmp.pct_energy, 0.0);
    assert_eq!(cmp.pct_fees, 100.0);
}

#[test]
fn connection_type_changes_the_result_deterministically() {
    let mut single = reference_input();
    single.connection_type = ConnectionType::SinglePhase;

    let cmp_three = compute(&reference_input());
    let cmp_single = compute(&single);

    assert_eq!(cmp_three.minimum_billable_kwh, 100.0);
    assert_eq!(cmp_single.minimum_billable_kwh, 30.0);
    assert!(cmp_single.offset_kwh > cmp_three.offset_kwh);
    assert!(cmp_single.savings_amount > cmp_three.savings_amount);
}

#[test]
fn repeated_computation_is_byte_identical_in_every_view() {
    let input = reference_input();
    let cmp1 = compute(&input);
    let cmp2 = compute(&input);
    assert_eq!(cmp1, cmp2);

    assert_eq!(
        render_quote_report(&input, &cmp1),
        render_quote_report(&input, &cmp2)
    );

    let mut csv1 = Vec::new();
    let mut csv2 = Vec::new();
    write_csv(&cmp1, &mut csv1).expect("csv export should succeed");
    write_csv(&cmp2, &mut csv2).expect("csv export should succeed");
    assert_eq!(csv1, csv2);
}

#[test]
fn no_clamp_is_applied_to_negative_savings() {
    // Below the availability floor the switch costs money; the result is
    // reported as computed, without flooring at zero.
    let input = QuoteInput {
        average_consumption_kwh: 50.0,
        public_lighting_fee: 10.0,
        connection_type: ConnectionType::ThreePhase,
        contracted_discount_pct: 15.0,
    };
    let cmp = compute(&input);
    assert_eq!(cmp.offset_kwh, 0.0);
    assert!(cmp.savings_amount < 0.0);
    assert!(cmp.savings_pct < 0.0);
}
