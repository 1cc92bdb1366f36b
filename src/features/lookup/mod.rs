pub mod client;

pub use client::{DictionaryClient, LookupOutcome, WordLookup};
