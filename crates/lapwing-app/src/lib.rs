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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Lapwing host shell: the terminal stand-in for the watch UI.
//!
//! Layout: `config.rs` (flags + validation), `shell.rs` (interactive loop),
//! `bootstrap.rs` (wiring), `error.rs` (host errors).

/// Shell bootstrap and dependency wiring.
pub mod bootstrap;
/// Command-line flags and validated configuration.
pub mod config;
/// Host-shell error types.
pub mod error;
/// The interactive shell itself.
pub mod shell;

pub use bootstrap::run_shell;
pub use error::{AppError, AppResult};
