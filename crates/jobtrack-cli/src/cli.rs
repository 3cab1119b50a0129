use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use jobtrack::job::JobId;
use jobtrack::view::RawFilter;
use jobtrack::{Color, JobStatus, Port, Section};

/// Track shipment jobs from the terminal.
#[derive(Parser, Debug)]
#[command(name = "jobtrack", version, about)]
pub struct Cli {
    /// Path to a config file (default: ~/.jobtrack/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn level_override(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else if self.verbose {
            Some("debug")
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List jobs with filters, sorting and pagination
    List(ListArgs),
    /// Show every field of one job
    Show {
        id: JobId,
    },
    /// Record a new job
    Add(AddArgs),
    /// Change fields of an existing job
    Edit(EditArgs),
    /// Delete a job
    Delete {
        id: JobId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show total, active and filtered counts
    Stats(StatsArgs),
    /// Print the port catalog
    Ports,
    /// Add sample jobs to an empty collection
    Seed,
}

/// Filter flags shared by `list` and `stats`. Values stay untyped so a bad
/// value disables that filter instead of aborting the command.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Earliest job date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest job date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub section: Option<String>,
    /// Port code or full label
    #[arg(long)]
    pub port: Option<String>,
    /// Case-insensitive substring of the entry number
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_raw(&self) -> RawFilter {
        RawFilter {
            date_from: self.from.clone(),
            date_to: self.to.clone(),
            color: self.color.clone(),
            status: self.status.clone(),
            section: self.section.clone(),
            port: self.port.clone(),
            search: self.search.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Sort field: date, entryNo, containerNo, port, section, status, color
    #[arg(long)]
    pub sort: Option<jobtrack::SortField>,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default from config)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Job date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub color: Color,
    /// Port code or full label
    #[arg(long)]
    pub port: Port,
    #[arg(long)]
    pub status: JobStatus,
    #[arg(long)]
    pub section: Section,
    #[arg(long)]
    pub entry_no: String,
    #[arg(long)]
    pub container_no: String,
    #[arg(long)]
    pub remarks: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: JobId,
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub color: Option<Color>,
    #[arg(long)]
    pub port: Option<Port>,
    #[arg(long)]
    pub status: Option<JobStatus>,
    #[arg(long)]
    pub section: Option<Section>,
    #[arg(long)]
    pub entry_no: Option<String>,
    #[arg(long)]
    pub container_no: Option<String>,
    /// New remarks; pass an empty string to clear them
    #[arg(long)]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "jobtrack", "list", "--status", "done", "--sort", "entryNo", "--page", "2",
        ])
        .unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.filters.status.as_deref(), Some("done"));
        assert_eq!(args.sort, Some(jobtrack::SortField::EntryNo));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn test_parse_add_uses_typed_fields() {
        let cli = Cli::try_parse_from([
            "jobtrack",
            "add",
            "--color",
            "red",
            "--port",
            "MICT",
            "--status",
            "lodge",
            "--section",
            "7",
            "--entry-no",
            "E-1",
            "--container-no",
            "C-1",
        ])
        .unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.color, Color::Red);
        assert_eq!(args.port, Port::Mict);
        assert_eq!(args.section.get(), 7);
        assert!(args.date.is_none());
    }

    #[test]
    fn test_add_rejects_out_of_range_section() {
        let result = Cli::try_parse_from([
            "jobtrack",
            "add",
            "--color",
            "red",
            "--port",
            "MICT",
            "--status",
            "lodge",
            "--section",
            "16",
            "--entry-no",
            "E-1",
            "--container-no",
            "C-1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["jobtrack", "-q", "-v", "ports"]).is_err());
        let cli = Cli::try_parse_from(["jobtrack", "--verbose", "ports"]).unwrap();
        assert_eq!(cli.level_override(), Some("debug"));
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["jobtrack", "seed"]).unwrap();
        assert!(matches!(cli.command, Commands::Seed));
    }
}
