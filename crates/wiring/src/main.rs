//! Wiring command line
//!
//! ```text
//! wiring [--config <path>] [--caching] [--auditing] [--json] <ID>...
//! wiring bindings
//! ```
//!
//! Fetches each id through the document service and prints how long the
//! lookup took. Repeating an id with `--caching` shows the cache at work.

use clap::Parser;
use wiring::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
