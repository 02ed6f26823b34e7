//! tiercache command line entry point

use clap::Parser;
use std::process::ExitCode;
use tiercache::cli::{Cli, execute};
use tiercache::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (config, source) = cli.load_config()?;
    init_logging(&config.logging)?;
    if let Some(source) = &source {
        source.log();
    }

    let output = execute(&cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output.body)?);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
