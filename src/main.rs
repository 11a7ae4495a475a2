use anyhow::Result;
use clap::{Parser, Subcommand};
use crispair::algorithm::{acquisition, order};

#[derive(Parser)]
#[command(name = "crispair")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise comparison of leader-ordered CRISPR arrays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align locus pairs and score spacer acquisition
    Acquisition(acquisition::AcquisitionArgs),

    /// Dump each locus's leader-ordered array
    Order(order::OrderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Acquisition(args) => {
            acquisition::run(args)?;
        }
        Commands::Order(args) => {
            order::run(args)?;
        }
    }
    Ok(())
}
