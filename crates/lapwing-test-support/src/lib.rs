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

//! Shared test helpers used across the lapwing suites.
//! Layout: clock.rs (manual clock), fixtures.rs (sample builders).

pub mod clock;
pub mod fixtures;

pub use clock::ManualClock;
pub use fixtures::{bpm_sample, bpm_series};
