//! Word list enrichment for the CET-4 vocabulary trainer.
//!
//! Two passes share this library: `cet4-words` reads a `.txt`/`.docx` word
//! list, looks every word up in the dictionary service and saves the records
//! as JSON; `cet4-js` turns that JSON into the `cet4Words` array the
//! front-end loads.

pub mod config;
pub mod data;
pub mod features;
pub mod parser;
pub mod utils;

pub use data::models::{ConvertedWordEntry, WordRecord};
pub use features::convert::{ConvertOptions, convert};
pub use features::enrich::{EnrichEvent, EnrichmentDriver};
pub use features::lookup::{DictionaryClient, LookupOutcome, WordLookup};
pub use parser::read_words;
