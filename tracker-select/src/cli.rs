use clap::{Parser, Subcommand};
use tracker_api::endpoints::TransactionId;

#[derive(Parser, Debug)]
#[command(name = "tracker-select")]
#[command(version)]
#[command(about = "Select transactions and run bulk actions against the finance tracker", long_about = None)]
pub struct Cli {
    /// Ids of the rows currently shown in the transactions table
    #[arg(long, value_delimiter = ',', global = true)]
    pub rows: Vec<TransactionId>,

    /// Skip delete confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current selection
    Status,
    /// Select transactions.
    Select {
        #[arg(required = true)]
        ids: Vec<TransactionId>,
    },
    /// Unselect transactions.
    Unselect {
        #[arg(required = true)]
        ids: Vec<TransactionId>,
    },
    /// Select every row passed with --rows (header checkbox)
    SelectAll,
    /// Unselect every row passed with --rows (header checkbox)
    UnselectAll,
    /// Clear the whole selection
    Clear,
    /// Delete a single transaction.
    Delete { id: TransactionId },
    /// Delete every selected transaction.
    DeleteSelected,
    /// Delete ALL transactions on the server.
    DeleteAll,
    /// Refresh the analytics summary and spending insights
    Refresh,
    /// Re-read the stored selection
    Reload,
}

impl Command {
    /// Whether the command sends a request that changes server state
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Delete { .. } | Command::DeleteSelected | Command::DeleteAll
        )
    }
}
