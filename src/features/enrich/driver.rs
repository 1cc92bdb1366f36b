use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::data::models::{EnrichError, WordRecord};
use crate::features::lookup::{LookupOutcome, WordLookup};
use crate::parser;

pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Progress notifications emitted while an enrichment run is underway.
#[derive(Debug)]
pub enum EnrichEvent<'a> {
    WordsRead {
        path: &'a Path,
        total: usize,
    },
    WordDone {
        index: usize, // 1-based
        total: usize,
        record: &'a WordRecord,
        degraded: bool,
    },
    Saved {
        path: &'a Path,
        count: usize,
    },
}

/// Reads a word list, looks every word up one at a time and persists the batch.
pub struct EnrichmentDriver<L> {
    lookup: L,
    pacing: Duration,
}

impl<L: WordLookup> EnrichmentDriver<L> {
    pub fn new(lookup: L, pacing: Duration) -> Self {
        Self { lookup, pacing }
    }

    /// Runs the whole pass. A failure to read `input` aborts before any lookup.
    pub async fn run(
        &self,
        input: &Path,
        output: &Path,
        mut on_event: impl FnMut(EnrichEvent<'_>),
    ) -> Result<Vec<WordRecord>, EnrichError> {
        let words = parser::read_words(input)?;
        log::debug!("Read {} words from {}", words.len(), input.display());
        on_event(EnrichEvent::WordsRead {
            path: input,
            total: words.len(),
        });

        let records = self.enrich_words(&words, &mut on_event).await;

        write_records(output, &records)?;
        log::debug!("Saved {} records to {}", records.len(), output.display());
        on_event(EnrichEvent::Saved {
            path: output,
            count: records.len(),
        });

        Ok(records)
    }

    /// Looks up each word in order, sleeping for the pacing delay after every call.
    pub async fn enrich_words(
        &self,
        words: &[String],
        on_event: &mut impl FnMut(EnrichEvent<'_>),
    ) -> Vec<WordRecord> {
        let total = words.len();
        let mut records = Vec::with_capacity(total);

        for (i, word) in words.iter().enumerate() {
            let outcome = self.lookup.lookup(word).await;
            let degraded = outcome.is_degraded();
            if let LookupOutcome::Degraded { reason, .. } = &outcome {
                log::warn!("No dictionary data for {:?}: {}", word, reason);
            }

            let record = outcome.into_record();
            on_event(EnrichEvent::WordDone {
                index: i + 1,
                total,
                record: &record,
                degraded,
            });
            records.push(record);

            tokio::time::sleep(self.pacing).await;
        }

        records
    }
}

/// Writes the batch as pretty-printed UTF-8 JSON, replacing any existing file.
pub fn write_records(path: &Path, records: &[WordRecord]) -> Result<(), EnrichError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
