use serde::{Deserialize, Serialize};

/// One looked-up vocabulary word, as persisted by the enrichment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,            // Query term, never empty
    pub phonetic: String,        // "UK [..] US [..]" or empty
    pub definition: Vec<String>, // Translations in service order
}

impl WordRecord {
    /// Record with no phonetic and no translations.
    pub fn empty(word: impl Into<String>) -> Self {
        WordRecord {
            word: word.into(),
            phonetic: String::new(),
            definition: Vec::new(),
        }
    }
}

/// Entry shape emitted into the generated front-end literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedWordEntry {
    pub word: String,
    pub phonetic: String,
    pub chinese: String, // Translations joined with "; "
}
