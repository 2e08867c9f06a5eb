mod lookup;

use serde_json::Value;
use stockdeck_core::Envelope;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    match &cli.command {
        Command::Lookup(args) => lookup::run(args).await,
    }
}
