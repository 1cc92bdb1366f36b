use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::data::models::{ConvertError, ConvertedWordEntry};
use crate::utils::escape_literal;

pub const DEFAULT_LIST_FIELD: &str = "chinese";
pub const DEFAULT_IDENTIFIER: &str = "cet4Words";
pub const JOIN_DELIMITER: &str = "; ";

/// Knobs for the JSON to JavaScript conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Name of the translation list field in each input entry. The enrichment
    /// pass writes `definition`; older word files carry `chinese`.
    pub list_field: String,
    /// Variable the generated array is assigned to.
    pub identifier: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            list_field: DEFAULT_LIST_FIELD.to_string(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
        }
    }
}

/// Reads `input`, renders it and writes the literal to `output`.
/// Returns the number of entries written.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<usize, ConvertError> {
    let content = fs::read_to_string(input)?;
    let entries = parse_entries(&content, &options.list_field)?;
    let js = render_literal(&entries, &options.identifier);

    fs::write(output, js)?;
    log::debug!(
        "Converted {} entries from {} to {}",
        entries.len(),
        input.display(),
        output.display()
    );
    Ok(entries.len())
}

/// Turns the persisted JSON array into entries with joined translations.
pub fn parse_entries(
    json: &str,
    list_field: &str,
) -> Result<Vec<ConvertedWordEntry>, ConvertError> {
    let data: Value = serde_json::from_str(json)?;
    let items = data.as_array().ok_or(ConvertError::NotAnArray)?;

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let missing = |field: &str| ConvertError::MissingField {
            index,
            field: field.to_string(),
        };

        let word = item.get("word").and_then(Value::as_str).ok_or_else(|| missing("word"))?;
        let phonetic = item
            .get("phonetic")
            .and_then(Value::as_str)
            .ok_or_else(|| missing("phonetic"))?;
        let translations = item
            .get(list_field)
            .and_then(Value::as_array)
            .ok_or_else(|| missing(list_field))?
            .iter()
            .map(|t| t.as_str().ok_or_else(|| missing(list_field)))
            .collect::<Result<Vec<_>, _>>()?;

        entries.push(ConvertedWordEntry {
            word: word.to_string(),
            phonetic: phonetic.to_string(),
            chinese: translations.join(JOIN_DELIMITER),
        });
    }
    Ok(entries)
}

pub fn render_literal(entries: &[ConvertedWordEntry], identifier: &str) -> String {
    let mut js = format!("const {} = [\n", identifier);
    for entry in entries {
        js.push_str("  {\n");
        js.push_str(&format!("    \"word\": \"{}\",\n", escape_literal(&entry.word)));
        js.push_str(&format!("    \"phonetic\": \"{}\",\n", escape_literal(&entry.phonetic)));
        js.push_str(&format!("    \"chinese\": \"{}\"\n", escape_literal(&entry.chinese)));
        js.push_str("  },\n");
    }
    js.push_str("];");
    js
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_renders_entries() {
        let json = r#"[
            {"word": "hello", "phonetic": "UK [a] US [b]", "chinese": ["你好", "喂"]},
            {"word": "world", "phonetic": "", "chinese": []}
        ]"#;

        let entries = parse_entries(json, DEFAULT_LIST_FIELD).unwrap();
        assert_eq!(entries[0].chinese, "你好; 喂");
        assert_eq!(entries[1].chinese, "");

        let js = render_literal(&entries, DEFAULT_IDENTIFIER);
        assert_eq!(
            js,
            concat!(
                "const cet4Words = [\n",
                "  {\n",
                "    \"word\": \"hello\",\n",
                "    \"phonetic\": \"UK [a] US [b]\",\n",
                "    \"chinese\": \"你好; 喂\"\n",
                "  },\n",
                "  {\n",
                "    \"word\": \"world\",\n",
                "    \"phonetic\": \"\",\n",
                "    \"chinese\": \"\"\n",
                "  },\n",
                "];",
            )
        );
    }

    #[test]
    fn quotes_are_escaped() {
        let json = r#"[{"word": "say", "phonetic": "", "chinese": ["说 \"你好\"", "a\\b"]}]"#;
        let entries = parse_entries(json, DEFAULT_LIST_FIELD).unwrap();
        let js = render_literal(&entries, "words");

        assert!(js.starts_with("const words = [\n"));
        assert!(js.contains(r#""chinese": "说 \"你好\"; a\\b""#));
    }

    #[test]
    fn list_field_is_configurable() {
        let json = r#"[{"word": "hello", "phonetic": "", "definition": ["你好"]}]"#;

        let err = parse_entries(json, DEFAULT_LIST_FIELD).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingField { index: 0, ref field } if field == "chinese"
        ));

        let entries = parse_entries(json, "definition").unwrap();
        assert_eq!(entries[0].chinese, "你好");
    }

    #[test]
    fn missing_word_reports_entry_index() {
        let json = r#"[
            {"word": "a", "phonetic": "", "chinese": []},
            {"phonetic": "", "chinese": []}
        ]"#;
        let err = parse_entries(json, DEFAULT_LIST_FIELD).unwrap_err();
        assert!(matches!(err, ConvertError::MissingField { index: 1, .. }));
    }

    #[test]
    fn rejects_non_array_and_bad_json() {
        assert!(matches!(
            parse_entries(r#"{"word": "a"}"#, DEFAULT_LIST_FIELD).unwrap_err(),
            ConvertError::NotAnArray
        ));
        assert!(matches!(
            parse_entries("[{", DEFAULT_LIST_FIELD).unwrap_err(),
            ConvertError::Json(_)
        ));
    }

    #[test]
    fn convert_overwrites_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.json");
        let output = dir.path().join("words.js");
        fs::write(&input, r#"[{"word": "a", "phonetic": "", "chinese": ["一"]}]"#).unwrap();
        fs::write(&output, "old").unwrap();

        let count = convert(&input, &output, &ConvertOptions::default()).unwrap();

        assert_eq!(count, 1);
        let js = fs::read_to_string(&output).unwrap();
        assert!(js.starts_with("const cet4Words = [\n"));
        assert!(js.ends_with("];"));
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(
            &dir.path().join("absent.json"),
            &dir.path().join("out.js"),
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
