pub mod dict_models;
pub mod error_models;
pub mod word_models;

pub use dict_models::DictResponse;
pub use error_models::{ConvertError, EnrichError, LookupError, ReadError};
pub use word_models::{ConvertedWordEntry, WordRecord};
