pub mod driver;

pub use driver::{EnrichEvent, EnrichmentDriver, write_records};
