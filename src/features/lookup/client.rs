use std::time::Duration;

use async_trait::async_trait;

use crate::data::models::dict_models::{DictResponse, EcSection, SimpleSection};
use crate::data::models::{LookupError, WordRecord};

pub const DEFAULT_ENDPOINT: &str = "https://dict.youdao.com/jsonapi";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Asks for the concise English-Chinese block plus phrases.
const DICTS_PARAM: &str = r#"{"count":99,"dicts":[["ec","phrs"]]}"#;

/// Result of a single dictionary lookup.
///
/// Both variants carry a record the caller can persist as-is; `Degraded`
/// additionally keeps the reason the lookup produced no data.
#[derive(Debug)]
pub enum LookupOutcome {
    Found(WordRecord),
    Degraded { record: WordRecord, reason: LookupError },
}

impl LookupOutcome {
    pub fn degraded(word: &str, reason: LookupError) -> Self {
        LookupOutcome::Degraded {
            record: WordRecord::empty(word),
            reason,
        }
    }

    pub fn record(&self) -> &WordRecord {
        match self {
            LookupOutcome::Found(record) => record,
            LookupOutcome::Degraded { record, .. } => record,
        }
    }

    pub fn into_record(self) -> WordRecord {
        match self {
            LookupOutcome::Found(record) => record,
            LookupOutcome::Degraded { record, .. } => record,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, LookupOutcome::Degraded { .. })
    }
}

/// Anything that can turn a word into a [`LookupOutcome`]. Implementations
/// must not fail; errors are reported through `LookupOutcome::Degraded`.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> LookupOutcome;
}

/// HTTP client for the dictionary JSON API.
pub struct DictionaryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DictionaryClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch(&self, word: &str) -> Result<WordRecord, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", word), ("dicts", DICTS_PARAM)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let data: DictResponse = serde_json::from_slice(&body)?;

        Ok(WordRecord {
            word: word.to_string(),
            phonetic: extract_phonetic(data.simple.as_ref())?,
            definition: extract_translations(data.ec.as_ref())?,
        })
    }
}

#[async_trait]
impl WordLookup for DictionaryClient {
    async fn lookup(&self, word: &str) -> LookupOutcome {
        match self.fetch(word).await {
            Ok(record) => LookupOutcome::Found(record),
            Err(reason) => {
                log::debug!("Lookup for {:?} degraded: {}", word, reason);
                LookupOutcome::degraded(word, reason)
            }
        }
    }
}

fn extract_phonetic(simple: Option<&SimpleSection>) -> Result<String, LookupError> {
    let Some(words) = simple.and_then(|s| s.word.as_ref()) else {
        return Ok(String::new());
    };
    let first = words
        .first()
        .ok_or_else(|| LookupError::MalformedResponse("empty simple.word list".into()))?;

    Ok(format_phonetic(
        first.ukphone.as_deref().unwrap_or(""),
        first.usphone.as_deref().unwrap_or(""),
    ))
}

fn extract_translations(ec: Option<&EcSection>) -> Result<Vec<String>, LookupError> {
    let Some(words) = ec.and_then(|s| s.word.as_ref()) else {
        return Ok(Vec::new());
    };
    let first = words
        .first()
        .ok_or_else(|| LookupError::MalformedResponse("empty ec.word list".into()))?;

    let mut translations = Vec::new();
    for group in &first.trs {
        // Groups without a `tr` block carry no gloss and are skipped.
        let Some(tr) = &group.tr else { continue };
        let line = tr
            .first()
            .and_then(|gloss| gloss.l.i.first())
            .ok_or_else(|| LookupError::MalformedResponse("empty gloss in ec.word.trs".into()))?;
        translations.push(line.clone());
    }
    Ok(translations)
}

/// Builds the display transcription, e.g. `UK [ə'bændən] US [ə'bændən]`.
pub fn format_phonetic(uk: &str, us: &str) -> String {
    match (uk.is_empty(), us.is_empty()) {
        (false, false) => format!("UK [{}] US [{}]", uk, us),
        (false, true) => format!("UK [{}]", uk),
        (true, false) => format!("US [{}]", us),
        (true, true) => String::new(),
    }
}
