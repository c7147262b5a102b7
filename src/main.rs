//! # fetch Main Entry Point
//!
//! Parses the command line, sends one request, prints the response.

use std::io;

use anyhow::Result;
use fetch::cmd_args::CommandLineArgs;
use fetch::logging::init_tracing_subscriber;
use fetch::ReqwestTransport;

fn main() -> Result<()> {
    init_tracing_subscriber();

    let options = CommandLineArgs::parse().into_option_bag();
    tracing::debug!("Options: {:?}", options);

    let stdout = io::stdout();
    let stderr = io::stderr();
    fetch::run(
        &options,
        &ReqwestTransport::new(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}
