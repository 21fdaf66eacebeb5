use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{optimize::OptimizeArgs, schema::SchemaArgs, traffic::TrafficArgs};

mod optimize;
mod output;
mod parsers;
mod schema;
mod stops;
mod traffic;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the traffic level for a set of stops
    #[command(visible_alias = "t")]
    Traffic {
        #[command(flatten)]
        args: TrafficArgs,
    },
    /// Send the stops to the optimization service
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Print the JSON schema of the optimization service contract
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Traffic { args } => traffic::run(args)?,
        Commands::Optimize { args } => optimize::run(args).await?,
        Commands::Schema { args } => schema::run(args)?,
    }

    Ok(())
}
