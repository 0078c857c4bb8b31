//! The backfill driver: iterate the records, resolve missing DOIs, rewrite
//! the file once at the end.

use crate::citation::extract_title_and_first_author;
use crate::error::Result;
use crate::lookup::DoiResolver;
use crate::records::{load_publications, save_publications, Publication};
use std::path::Path;
use std::time::Duration;

/// Pause after every lookup attempt, to stay polite to Crossref.
const RECORD_DELAY: Duration = Duration::from_secs(1);

/// Counts reported after a backfill pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackfillSummary {
    /// Records that gained a `url` this run.
    pub updated: usize,
    /// Records that still lack a `url` after this run.
    pub still_missing: usize,
}

/// Backfill `url` on every record that lacks one, in order.
///
/// Lookup failures are logged with the record's 1-based position and counted
/// as misses; they never abort the pass or touch the record. A fixed
/// [`RECORD_DELAY`] follows every attempted record, hit and miss alike.
pub async fn backfill<R: DoiResolver>(
    records: &mut [Publication],
    resolver: &R,
) -> BackfillSummary {
    let mut updated = 0;
    let mut missing = 0;

    for (i, record) in records.iter_mut().enumerate() {
        let pos = i + 1;
        if record.has_url() {
            continue;
        }
        missing += 1;

        let (title, author_last) = extract_title_and_first_author(record.citation());
        let doi = match resolver.resolve(&title, &author_last, record.year).await {
            Ok(doi) => doi,
            Err(e) => {
                log::warn!("[{pos:02}] ERROR: {e}");
                None
            }
        };

        match doi {
            Some(doi) if !doi.is_empty() => {
                record.url = Some(format!("https://doi.org/{doi}"));
                updated += 1;
                log::info!("[{pos:02}] OK  {doi}  | {}", truncate(&title, 80));
            }
            _ => {
                log::info!("[{pos:02}] MISS      | {}", truncate(&title, 80));
            }
        }

        tokio::time::sleep(RECORD_DELAY).await;
    }

    BackfillSummary {
        updated,
        still_missing: missing - updated,
    }
}

/// Load the publications file, backfill it, and write it back in place.
pub async fn run<R: DoiResolver>(path: &Path, resolver: &R) -> Result<BackfillSummary> {
    let mut records = load_publications(path)?;
    let summary = backfill(&mut records, resolver).await;
    save_publications(path, &records)?;
    Ok(summary)
}

/// Truncate to at most `max` characters, on a char boundary.
fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
