use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::features::convert::ConvertOptions;
use crate::features::convert::converter::{DEFAULT_IDENTIFIER, DEFAULT_LIST_FIELD};
use crate::features::enrich::driver::DEFAULT_PACING;
use crate::features::lookup::client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Settings for the enrichment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub endpoint: String,
    pub timeout: Duration,
    pub pacing: Duration,
}

/// Settings for the conversion pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
}

impl EnrichSettings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input: get("WORDS_INPUT").unwrap_or_else(|| "cet4.txt".into()).into(),
            output: get("WORDS_OUTPUT").unwrap_or_else(|| "cet4_words.json".into()).into(),
            endpoint: get("DICT_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into()),
            timeout: Duration::from_secs(parse_or(
                &get,
                "LOOKUP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT.as_secs(),
            )),
            pacing: Duration::from_millis(parse_or(
                &get,
                "LOOKUP_PACING_MS",
                DEFAULT_PACING.as_millis() as u64,
            )),
        }
    }

    /// Positional `[input] [output]` arguments override the configured paths.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            self.input = input.into();
        }
        if let Some(output) = args.next() {
            self.output = output.into();
        }
        self
    }
}

impl ConvertSettings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            input: get("CONVERT_INPUT").unwrap_or_else(|| "cet4_words.json".into()).into(),
            output: get("CONVERT_OUTPUT").unwrap_or_else(|| "cet4_words.js".into()).into(),
            options: ConvertOptions {
                list_field: get("CONVERT_LIST_FIELD")
                    .unwrap_or_else(|| DEFAULT_LIST_FIELD.into()),
                identifier: get("CONVERT_IDENTIFIER")
                    .unwrap_or_else(|| DEFAULT_IDENTIFIER.into()),
            },
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        let mut args = args.into_iter();
        if let Some(input) = args.next() {
            self.input = input.into();
        }
        if let Some(output) = args.next() {
            self.output = output.into();
        }
        self
    }
}

fn parse_or<T: FromStr + Copy>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn enrich_defaults() {
        let settings = EnrichSettings::from_source(source(&[]));
        assert_eq!(settings.input, PathBuf::from("cet4.txt"));
        assert_eq!(settings.output, PathBuf::from("cet4_words.json"));
        assert_eq!(settings.endpoint, "https://dict.youdao.com/jsonapi");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.pacing, Duration::from_millis(500));
    }

    #[test]
    fn enrich_env_and_args_override() {
        let settings = EnrichSettings::from_source(source(&[
            ("WORDS_INPUT", "list.docx"),
            ("LOOKUP_PACING_MS", "250"),
            ("LOOKUP_TIMEOUT_SECS", "soon"),
        ]))
        .with_args(vec!["cli.txt".to_string()]);

        assert_eq!(settings.input, PathBuf::from("cli.txt"));
        assert_eq!(settings.output, PathBuf::from("cet4_words.json"));
        assert_eq!(settings.pacing, Duration::from_millis(250));
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn convert_settings_expose_the_list_field_seam() {
        let defaults = ConvertSettings::from_source(source(&[]));
        assert_eq!(defaults.options, ConvertOptions::default());
        assert_eq!(defaults.output, PathBuf::from("cet4_words.js"));

        let settings =
            ConvertSettings::from_source(source(&[("CONVERT_LIST_FIELD", "definition")]))
                .with_args(vec!["in.json".to_string(), "out.js".to_string()]);
        assert_eq!(settings.options.list_field, "definition");
        assert_eq!(settings.input, PathBuf::from("in.json"));
        assert_eq!(settings.output, PathBuf::from("out.js"));
    }
}
