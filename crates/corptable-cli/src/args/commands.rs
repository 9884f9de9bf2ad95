use clap::{Args, Subcommand};
use corptable_types::{CompanyField, CompanyId};

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Interactive table (default)
    Tui,

    /// Print one page of companies
    List(ListArgs),

    /// Print a single company
    Show {
        /// Company id
        id: CompanyId,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Sort column: id, name, manager, phone, address
    #[arg(long)]
    pub sort: Option<CompanyField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Case-insensitive match on the manager name
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Print the resolved config path
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
