use std::{fs::File, io::Write, path::PathBuf};

use clap::Args;
use greenroute_service::{OptimizationResult, OptimizeRequest};
use tracing::info;

#[derive(Args)]
pub struct SchemaArgs {
    /// Write the schemas to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let request = schemars::schema_for!(OptimizeRequest);
    let response = schemars::schema_for!(OptimizationResult);
    let schemas = serde_json::json!({
        "request": request,
        "response": response,
    });
    let content = serde_json::to_string_pretty(&schemas)?;

    match args.output {
        Some(path) => {
            let mut file = File::create(&path)?;
            file.write_all(content.as_bytes())?;
            info!("Schemas have been written to {}", path.display());
        }
        None => println!("{content}"),
    }

    Ok(())
}
