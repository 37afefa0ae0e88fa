use clap::{Parser, Subcommand};
use pf_app::{AppError, AppResult, CaseReport, StreamReport, load_case};
use pf_substances::{BuiltinSource, Layered, MapSource, SubstanceDataSource};
use pf_units::Quantity;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "ProcFlow CLI - single-stage flash separator calculations", long_about = None)]
struct Cli {
    /// Log solver progress (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the flash in a case file
    Flash {
        /// Path to the case YAML (or .json) file
        case_path: PathBuf,
        /// Print the report as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,
        /// Print the report as YAML
        #[arg(long)]
        yaml: bool,
    },
    /// Validate case file syntax and structure
    Validate {
        /// Path to the case YAML (or .json) file
        case_path: PathBuf,
    },
    /// Saturation pressure of a substance
    VaporPressure {
        /// Substance name or alias (e.g. "n-hexane", "c3h8")
        substance: String,
        /// Temperature value
        #[arg(allow_negative_numbers = true)]
        temperature: f64,
        /// Temperature unit (K, C, F, R)
        #[arg(long, default_value = "K")]
        unit: String,
        /// Output pressure unit (atm, bar, Pa, kPa, psi, mmHg)
        #[arg(long, default_value = "bar")]
        pressure_unit: String,
        /// Substance data file consulted before the built-in catalog
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Convert a value between units
    Convert {
        /// temperature, pressure, time, molar, mass or flow
        quantity: Quantity,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// List built-in substances
    Substances {
        /// Filter by name, id or alias
        query: Option<String>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Flash {
            case_path,
            json,
            yaml,
        } => cmd_flash(&case_path, json, yaml),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::VaporPressure {
            substance,
            temperature,
            unit,
            pressure_unit,
            data,
        } => cmd_vapor_pressure(
            &substance,
            temperature,
            &unit,
            &pressure_unit,
            data.as_deref(),
        ),
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => cmd_convert(quantity, value, &from, &to),
        Commands::Substances { query } => cmd_substances(query.as_deref().unwrap_or("")),
    }
}

fn cmd_flash(case_path: &Path, json: bool, yaml: bool) -> AppResult<()> {
    let report = pf_app::run_case_file(case_path)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Output(e.to_string()))?;
        println!("{out}");
    } else if yaml {
        let out = serde_yaml::to_string(&report).map_err(|e| AppError::Output(e.to_string()))?;
        print!("{out}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &CaseReport) {
    println!("Case: {}", report.case);
    println!("Unit: {}", report.unit);
    println!(
        "  Vapor fraction: {:.6} ({} iterations, residual {:.3e})",
        report.vapor_fraction, report.iterations, report.residual
    );
    println!("  K-values:");
    for (tag, k) in &report.k_values {
        println!("    {tag:<20} {k:>12.6}");
    }
    for stream in &report.streams {
        print_stream(stream);
    }
}

fn print_stream(stream: &StreamReport) {
    println!("Stream: {}", stream.name);
    println!(
        "  Flow rate: {} {}",
        stream.flow_rate.value(),
        stream.flow_rate.unit()
    );
    if let Some(p) = &stream.pressure {
        println!("  Pressure: {} {}", p.value(), p.unit());
    }
    if let Some(t) = &stream.temperature {
        println!("  Temperature: {} {}", t.value(), t.unit());
    }
    for (tag, x) in &stream.compositions {
        println!("    {tag:<20} {x:>10.6}");
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load_case(case_path)?;
    println!("✓ Case '{}' is valid", case.name);
    println!(
        "  {} substances, flash unit '{}'",
        case.substances.len(),
        case.flash.name
    );
    Ok(())
}

fn cmd_vapor_pressure(
    substance: &str,
    temperature: f64,
    unit: &str,
    pressure_unit: &str,
    data: Option<&Path>,
) -> AppResult<()> {
    let source: Box<dyn SubstanceDataSource> = match data {
        Some(path) => Box::new(Layered::new(MapSource::from_yaml_path(path)?, BuiltinSource)),
        None => Box::new(BuiltinSource),
    };
    let p = pf_app::vapor_pressure(source.as_ref(), substance, temperature, unit, pressure_unit)?;
    println!("{p} {pressure_unit}");
    Ok(())
}

fn cmd_convert(quantity: Quantity, value: f64, from: &str, to: &str) -> AppResult<()> {
    let converted = pf_units::convert(quantity, value, from, to)?;
    tracing::debug!(%quantity, value, from, to, converted, "converted");
    println!("{converted} {to}");
    Ok(())
}

fn cmd_substances(query: &str) -> AppResult<()> {
    let substances = pf_app::list_substances(query);
    if substances.is_empty() {
        println!("No substances match '{query}'");
        return Ok(());
    }

    println!("{:<12} {:<12} {:>10}  range [K]", "id", "name", "MW");
    for s in substances {
        let range = match s.range_k {
            Some((lo, hi)) => format!("{lo:.1} - {hi:.1}"),
            None => "-".to_string(),
        };
        println!(
            "{:<12} {:<12} {:>10.3}  {}",
            s.id, s.name, s.molar_mass, range
        );
    }
    Ok(())
}
