//! contacts
//!
//! Edits a contact record through lenses and prints it as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Rename the built-in sample record
//! cargo run --bin contacts -- --name "mini Me"
//!
//! # Move a stored record and show the debug log
//! RUST_LOG=contacts=debug cargo run --bin contacts -- \
//!   --record me.json --city "new york city" --pretty --halve 20
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts::{Cli, ContactsError, halve_twice};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "contacts failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ContactsError> {
    let record = cli.load_record()?;
    tracing::debug!(?record, "loaded record");

    let plan = cli.edit_plan();
    if plan.is_noop() {
        tracing::info!("no edits requested");
    }

    let edited = plan.apply(record);
    println!("{}", edited.to_json(cli.pretty)?);

    if let Some(number) = cli.halve {
        println!("{}", halve_twice(number)?);
    }

    Ok(())
}
