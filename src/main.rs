//! Quote tool entry point — CLI wiring and config-driven computation.

use std::path::Path;
use std::process;

use solar_quote::billing::{self, ConnectionType};
use solar_quote::config::QuoteConfig;
use solar_quote::io::export::export_csv;
use solar_quote::reporting::print_quote_report;

/// Parsed CLI arguments.
struct CliArgs {
    quote_path: Option<String>,
    preset: Option<String>,
    consumption: Option<f64>,
    lighting_fee: Option<f64>,
    connection: Option<ConnectionType>,
    discount: Option<f64>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

impl CliArgs {
    /// Whether any quote input was supplied on the command line.
    fn has_input(&self) -> bool {
        self.quote_path.is_some()
            || self.preset.is_some()
            || self.consumption.is_some()
            || self.lighting_fee.is_some()
            || self.connection.is_some()
            || self.discount.is_some()
    }
}

fn print_help() {
    eprintln!("solar-quote — solar-lease savings quote calculator");
    eprintln!();
    eprintln!("Usage: solar-quote [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --quote <path>           Load quote inputs from TOML file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        QuoteConfig::PRESETS.join(", ")
    );
    eprintln!("  --consumption <kwh>      Monthly average consumption");
    eprintln!("  --lighting-fee <amount>  Monthly public-lighting charge");
    eprintln!("  --connection <type>      \"single-phase\" or \"three-phase\"");
    eprintln!("  --discount <pct>         Contracted discount percentage (0-100)");
    eprintln!("  --export <path>          Export the breakdown to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("All four inputs are required; direct flags override file/preset values.");
}

fn parse_f64_arg(args: &[String], i: usize, flag: &str) -> f64 {
    let Some(raw) = args.get(i) else {
        eprintln!("error: {flag} requires a value");
        process::exit(1);
    };
    match raw.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("error: {flag} value \"{raw}\" is not a valid number");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        quote_path: None,
        preset: None,
        consumption: None,
        lighting_fee: None,
        connection: None,
        discount: None,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--quote" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --quote requires a path argument");
                    process::exit(1);
                }
                cli.quote_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--consumption" => {
                i += 1;
                cli.consumption = Some(parse_f64_arg(&args, i, "--consumption"));
            }
            "--lighting-fee" => {
                i += 1;
                cli.lighting_fee = Some(parse_f64_arg(&args, i, "--lighting-fee"));
            }
            "--connection" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --connection requires a type argument");
                    process::exit(1);
                }
                match args[i].parse::<ConnectionType>() {
                    Ok(ct) => cli.connection = Some(ct),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--discount" => {
                i += 1;
                cli.discount = Some(parse_f64_arg(&args, i, "--discount"));
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    #[cfg(feature = "api")]
    if !cli.has_input() && cli.serve {
        // Server-only mode: the frontend supplies the inputs per request.
        serve_api(cli.port);
        return;
    }

    if !cli.has_input() {
        eprintln!("error: no quote input given");
        print_help();
        process::exit(1);
    }

    // Load config: --quote takes priority, then --preset, then empty
    let mut config = if let Some(ref path) = cli.quote_path {
        match QuoteConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match QuoteConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        QuoteConfig::default()
    };

    // Direct flags override file/preset values
    if let Some(kwh) = cli.consumption {
        config.quote.average_consumption_kwh = Some(kwh);
    }
    if let Some(fee) = cli.lighting_fee {
        config.quote.public_lighting_fee = Some(fee);
    }
    if let Some(ct) = cli.connection {
        config.quote.connection_type = Some(ct);
    }
    if let Some(pct) = cli.discount {
        config.quote.contracted_discount_pct = Some(pct);
    }

    // Validate ranges
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Completeness gate: all four inputs must be present
    let input = match config.resolve() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let comparison = billing::compute(&input);

    print_quote_report(&input, &comparison);
    println!("\n{comparison}");

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&comparison, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Breakdown written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        serve_api(cli.port);
    }
}

#[cfg(feature = "api")]
fn serve_api(port: u16) {
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    rt.block_on(solar_quote::api::serve(addr));
}
