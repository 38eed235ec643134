//! OrgChart CLI - print team and employee status for a company roster.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orgchart_core::RoleKind;
use orgchart_roster::{LoadedRoster, Roster};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orgchart")]
#[command(about = "Company org chart viewer", long_about = None)]
struct Cli {
    /// Log roster loading details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every team of the built-in sample company
    Demo,
    /// Print every team in a roster file
    Show {
        /// Roster JSON file
        roster: PathBuf,
    },
    /// Print one status line per employee in a roster file
    Status {
        /// Roster JSON file
        roster: PathBuf,
        /// Only employees of this role
        #[arg(long)]
        role: Option<String>,
    },
    /// Print the sample roster as JSON, as a starting point for your own
    SampleRoster,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => {
            let loaded = Roster::sample().load()?;
            print_teams(&loaded)?;
        }
        Commands::Show { roster } => {
            let loaded = load(&roster)?;
            print_teams(&loaded)?;
        }
        Commands::Status { roster, role } => {
            let role = role
                .map(|r| parse_role(&r).with_context(|| format!("Unknown role: {}", r)))
                .transpose()?;

            let loaded = load(&roster)?;
            let chart = &loaded.chart;
            for employee in chart.employees() {
                if role.map_or(true, |r| employee.kind() == r) {
                    println!("{}", chart.employee_status(employee.id())?);
                }
            }
        }
        Commands::SampleRoster => {
            println!("{}", Roster::sample().to_json_pretty()?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn load(path: &Path) -> Result<LoadedRoster> {
    let roster = Roster::from_path(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    info!(path = %path.display(), "roster read");
    Ok(roster.load()?)
}

// Each status already ends in a newline, so println leaves a blank line.
fn print_teams(loaded: &LoadedRoster) -> Result<()> {
    for status in loaded.team_statuses()? {
        println!("{}", status);
    }
    Ok(())
}

fn parse_role(s: &str) -> Option<RoleKind> {
    match s.to_lowercase().as_str() {
        "engineer" | "software-engineer" => Some(RoleKind::SoftwareEngineer),
        "tech-lead" | "technical-lead" => Some(RoleKind::TechnicalLead),
        "accountant" => Some(RoleKind::Accountant),
        "business-lead" => Some(RoleKind::BusinessLead),
        _ => None,
    }
}
