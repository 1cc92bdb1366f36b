pub mod convert;
pub mod enrich;
mod errors;
pub mod lookup;
