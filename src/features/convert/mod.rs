pub mod converter;

pub use converter::{ConvertOptions, convert, parse_entries, render_literal};
