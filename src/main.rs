use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use httpdogs::cli::{CliOptions, Query};
use httpdogs::config::{DogConfig, setup_logging};
use httpdogs::{DogError, DogLookup, status_codes};
use tracing::error;

fn main() {
    let cli = CliOptions::parse();

    let _ = setup_logging(cli.debug);

    if let Err(err) = run(&cli) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &CliOptions) -> Result<()> {
    if cli.list {
        for status in status_codes::statuses() {
            println!("{}\t{}", status.code, status.display_name());
        }
        return Ok(());
    }

    let Some(query) = cli.query.as_deref() else {
        anyhow::bail!("Nothing to look up, pass a status code or name.");
    };

    let config = DogConfig::new(&cli.base_url, Duration::from_secs(cli.timeout))?;
    let lookup = DogLookup::new(&config);
    let dog = match Query::from(query) {
        Query::Code(code) => match u16::try_from(code) {
            Ok(code) => lookup.by_code(code)?,
            Err(_) => return Err(DogError::invalid_code(code).into()),
        },
        Query::Name(name) => lookup.by_name(&name)?,
    };

    if let Some(output) = cli.output.as_deref() {
        let path = dog
            .save_image(output)
            .with_context(|| format!("Failed to save image to {}", output.display()))?;
        eprintln!("Saved image to {}", path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&dog)?);
    } else {
        println!("{} {}", dog.code, dog);
        println!("{}", dog.description);
        println!("{}", dog.image_url);
    }
    Ok(())
}
