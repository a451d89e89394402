use clap::Parser;
use miette::Result;
use pcfg::cli::{Cli, Commands};
use pcfg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Check(args) => pcfg::cli::check::run(args, &printer)?,
        Commands::Show(args) => pcfg::cli::show::run(args)?,
        Commands::List(args) => pcfg::cli::list::run(args, &printer)?,
        Commands::Init(args) => pcfg::cli::init::run(args, &printer)?,
        Commands::Completions(args) => pcfg::cli::completions::run(args)?,
    }

    Ok(())
}
