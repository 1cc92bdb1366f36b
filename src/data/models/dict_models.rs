//! Wire types for the dictionary service JSON response.
//!
//! Only the fields the lookup client reads are modelled; everything else in
//! the payload is ignored by serde.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DictResponse {
    pub simple: Option<SimpleSection>,
    pub ec: Option<EcSection>,
}

/// Basic entry block carrying the UK/US transcriptions.
#[derive(Debug, Deserialize)]
pub struct SimpleSection {
    pub word: Option<Vec<SimpleWord>>,
}

#[derive(Debug, Deserialize)]
pub struct SimpleWord {
    pub ukphone: Option<String>,
    pub usphone: Option<String>,
}

/// English-Chinese dictionary block.
#[derive(Debug, Deserialize)]
pub struct EcSection {
    pub word: Option<Vec<EcWord>>,
}

#[derive(Debug, Deserialize)]
pub struct EcWord {
    #[serde(default)]
    pub trs: Vec<SenseGroup>,
}

#[derive(Debug, Deserialize)]
pub struct SenseGroup {
    pub tr: Option<Vec<Gloss>>,
}

#[derive(Debug, Deserialize)]
pub struct Gloss {
    pub l: GlossLines,
}

#[derive(Debug, Deserialize)]
pub struct GlossLines {
    pub i: Vec<String>,
}
