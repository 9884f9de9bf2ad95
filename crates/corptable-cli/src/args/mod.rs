mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "corptable")]
#[command(about = "Browse and edit a company registry in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CORPTABLE_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSON seed file replacing the built-in sample companies
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Rows per page (overrides the config file)
    #[arg(long, global = true)]
    pub page_size: Option<NonZeroUsize>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::parse_from([
            "corptable",
            "--page-size",
            "5",
            "list",
            "--page",
            "2",
            "--sort",
            "manager",
            "--desc",
            "--filter",
            "иван",
        ]);
        assert_eq!(cli.page_size.map(NonZeroUsize::get), Some(5));
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.page, 2);
        assert_eq!(args.sort, Some(corptable_types::CompanyField::ManagerName));
        assert!(args.desc);
        assert_eq!(args.filter.as_deref(), Some("иван"));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(Cli::try_parse_from(["corptable", "--page-size", "0", "list"]).is_err());
    }

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::parse_from(["corptable"]);
        assert!(cli.command.is_none());
    }
}
