#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Binary entrypoint that wires the lapwing shell together.

use lapwing_app::{AppResult, run_shell};

/// Launches the interactive shell and blocks until it exits.
#[tokio::main]
async fn main() -> AppResult<()> {
    run_shell().await
}
