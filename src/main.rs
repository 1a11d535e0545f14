use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use cpam_analytics::models::project_ideas;
use cpam_analytics::reports::{ActsReport, FullReport, SpendingReport};
use tabled::settings::Style;
use tabled::Table;

#[derive(Parser)]
#[command(
    name = "cpam-analytics",
    version,
    about = "Descriptive statistics reports over CPAM health datasets",
    long_about = "cpam-analytics computes descriptive statistics (totals, means, \
                  medians, standard deviations, growth rates, shares, Pearson \
                  correlations) over fixed health-spending and medical-act \
                  datasets and prints a structured report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full report (spending, acts, executive synthesis)
    Report {
        /// Export to a file instead of printing the report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },

    /// Generate the health-spending analysis only
    Spending {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the medical-acts analysis only
    Acts {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List portfolio project ideas
    Projects,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ExportFormat {
    /// Comma-separated values, both tables
    Csv,
    /// Pretty-printed JSON with a versioned envelope
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report { output, format }) => handle_report(output, format)?,
        Some(Commands::Spending { output }) => {
            let report = SpendingReport::generate()?;
            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    report.export_csv(&mut writer)?;
                    writer.flush()?;
                    println!("Spending report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }
        Some(Commands::Acts { output }) => {
            let report = ActsReport::generate()?;
            match output {
                Some(path) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    report.export_csv(&mut writer)?;
                    writer.flush()?;
                    println!("Acts report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }
        Some(Commands::Projects) => {
            println!("DATA-ANALYSIS PROJECT IDEAS - CPAM STRASBOURG INTERNSHIP");
            println!();
            let table = Table::new(project_ideas()).with(Style::sharp()).to_string();
            println!("{table}");
        }
        None => handle_report(None, ExportFormat::Csv)?,
    }

    Ok(())
}

/// Generate the full report, printing it or exporting it to a file
fn handle_report(output: Option<PathBuf>, format: ExportFormat) -> Result<()> {
    let report = FullReport::generate()?;

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            match format {
                ExportFormat::Csv => report.export_csv(&mut writer)?,
                ExportFormat::Json => report.export_json(&mut writer)?,
            }
            writer.flush()?;
            println!("Full report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", report.format_terminal())?;
            writeln!(handle)?;
            writeln!(handle, "Report generated successfully.")?;
        }
    }

    Ok(())
}
