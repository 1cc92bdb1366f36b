use anyhow::Context;

use cet4_words::config::EnrichSettings;
use cet4_words::{DictionaryClient, EnrichEvent, EnrichmentDriver, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_logging();

    let settings = EnrichSettings::from_env().with_args(std::env::args().skip(1));
    log::debug!("Enrichment settings: {:?}", settings);

    let client = DictionaryClient::new(&settings.endpoint, settings.timeout)
        .context("Failed to build HTTP client")?;
    let driver = EnrichmentDriver::new(client, settings.pacing);

    driver
        .run(&settings.input, &settings.output, |event| match event {
            EnrichEvent::WordsRead { path, total } => {
                println!("Read {} words from {}", total, path.display());
            }
            EnrichEvent::WordDone {
                index,
                total,
                record,
                degraded,
            } => {
                let marker = if degraded { "!" } else { "ok" };
                println!(
                    "[{}/{}] {} {} -> {:?}",
                    index, total, marker, record.word, record.definition
                );
            }
            EnrichEvent::Saved { path, count } => {
                println!("Done! {} records saved to {}", count, path.display());
            }
        })
        .await
        .with_context(|| format!("Enrichment of {} failed", settings.input.display()))?;

    Ok(())
}
