pub mod cli;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod lookup;
pub mod privilege;
pub mod probe;
pub mod report;
pub mod scanner;
pub mod security;
pub mod utils;
pub mod wifi;

use clap::Parser;
use cli::Cli;
use color_eyre::eyre::Result;

use crate::{
  config::ScanConfig,
  errors::ScanError,
  scanner::Orchestrator,
  utils::{initialize_logging, initialize_panic_handler},
  wifi::WifiRadio,
};

async fn tokio_main() -> Result<()> {
  initialize_logging()?;

  initialize_panic_handler()?;

  // Warn if not running with privileges (non-fatal, probes degrade to failure sentinels)
  if !privilege::has_network_privileges() {
    eprintln!("WARNING: {}", privilege::get_privilege_error_message());
    eprintln!();
  }

  let args = Cli::parse();
  let config = ScanConfig::from_cli(&args);
  let mut orchestrator = Orchestrator::new(WifiRadio::new(), &config)?;
  orchestrator.run_pass().await?;

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(e) = tokio_main().await {
    eprintln!("{} error: {e:#}", env!("CARGO_PKG_NAME"));
    let code = match e.downcast_ref::<ScanError>() {
      Some(ScanError::FacilityUnavailable) => 2,
      _ => 1,
    };
    std::process::exit(code);
  }
}
