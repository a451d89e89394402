pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod show;

use clap::{Parser, Subcommand};

/// pcfg - Weighted form grammar tools
#[derive(Parser, Debug)]
#[command(name = "pcfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and lint grammar files
    Check(check::CheckArgs),

    /// Print a parsed grammar as JSON or canonical source
    Show(show::ShowArgs),

    /// List discovered grammars
    List(list::ListArgs),

    /// Initialize a pcfg project (generates pcfg.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
