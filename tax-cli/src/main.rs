use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::logging::init_logging;
use tax_cli::{Config, OutputFormat, TaxForm, app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimate income tax, dependant exemptions and the resulting amount due or
/// refunded.
///
/// Enter a single estimate with `--income`, `--children` and `--parents`, or
/// estimate every row of a CSV file with `--csv`.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version, about)]
struct Cli {
    /// Annual income, e.g. `65000` or `65,000.00`.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "csv")]
    income: Option<String>,

    /// Number of children.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "csv")]
    children: Option<String>,

    /// Number of supported parents.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "csv")]
    parents: Option<String>,

    /// CSV file with `income,num_children,num_parents` columns.
    #[arg(long, conflicts_with_all = ["income", "children", "parents"])]
    csv: Option<PathBuf>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive. `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.format, cli.log_level, cli.log_file);

    init_logging(&config.logging.level, config.logging.file.as_deref())?;
    debug!(?config, "configuration loaded");

    let output = match cli.csv {
        Some(path) => app::estimate_csv(&path, config.output.format)?,
        None => {
            let form = TaxForm::new(
                cli.income.unwrap_or_default(),
                cli.children.unwrap_or_default(),
                cli.parents.unwrap_or_default(),
            );
            app::estimate_form(&form, config.output.format)?
        }
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
