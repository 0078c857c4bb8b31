//! # bibfill
//!
//! Backfills missing DOI links in a publications JSON file by querying the
//! Crossref works-search API.
//!
//! Provides:
//! - **Library**: citation parsing, title similarity scoring, an async
//!   Crossref client, and the backfill driver
//! - **CLI**: `bibfill` binary that rewrites the file in place
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> bibfill::error::Result<()> {
//! use bibfill::CrossrefClient;
//!
//! let client = CrossrefClient::new();
//! let summary = bibfill::run::run("assets/data/publications.json".as_ref(), &client).await?;
//! println!("Updated {} missing links.", summary.updated);
//! # Ok(())
//! # }
//! ```
//!
//! Each record in the file is a JSON object with a free-text `citation`, an
//! optional `year`, and an optional `url`. Records that already carry a
//! non-empty `url` are left untouched; for the rest the citation is parsed
//! into a candidate title and first-author surname, Crossref is queried once,
//! and the best title match above a fixed similarity threshold supplies the
//! DOI.

pub mod citation;
pub mod client;
pub mod error;
pub mod lookup;
pub mod records;
pub mod run;
pub mod similarity;

// Re-export key types at the crate root.
pub use client::CrossrefClient;
pub use error::BackfillError;
pub use lookup::DoiResolver;
pub use records::Publication;
pub use run::BackfillSummary;
