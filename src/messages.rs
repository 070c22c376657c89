use crate::constants::{DEFAULT_LANGUAGE, FALLBACK_DATE_FORMAT};
use crate::error::{ResizeError, Result};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Compiled-in copy of the default catalog so the binary works without a
/// `language/` directory next to it.
const EMBEDDED_EN_US: &str = include_str!("../language/en_US.json");

/// Message catalog file names must look like `ll_LL` (e.g. `pt_BR.json`).
static LANGUAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}_[A-Z]{2}$").unwrap());

/// User-facing message catalog loaded from a `language/<ll_LL>.json` file.
///
/// Entries are either plain template strings or `{"singular": .., "plural": ..}`
/// objects. Templates carry `{name}` placeholders filled via [`fill`].
pub struct Messages {
    catalog: Value,
    language: String,
}

impl Messages {
    /// Loads the catalog for `language` from `languages_dir`.
    ///
    /// The default language falls back to the embedded catalog when no file
    /// is present; any other missing language is an error.
    pub fn load(languages_dir: &Path, language: &str) -> Result<Self> {
        let path = languages_dir.join(format!("{}.json", language));

        let text = if path.is_file() {
            fs::read_to_string(&path)?
        } else if language == DEFAULT_LANGUAGE {
            EMBEDDED_EN_US.to_string()
        } else {
            return Err(ResizeError::UnknownLanguage(language.to_string()));
        };

        Ok(Self {
            catalog: serde_json::from_str(&text)?,
            language: language.to_string(),
        })
    }

    /// Catalog built from the embedded default messages.
    pub fn embedded() -> Self {
        Self {
            catalog: serde_json::from_str(EMBEDDED_EN_US)
                .expect("embedded message catalog is valid JSON"),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn output(&self, key: &str) -> Result<&str> {
        self.catalog
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| ResizeError::MissingMessage(key.to_string()))
    }

    /// Picks the singular form when `count == 1`, the plural form otherwise.
    pub fn output_plural(&self, key: &str, count: usize) -> Result<&str> {
        let form = if count == 1 { "singular" } else { "plural" };
        self.catalog
            .get(key)
            .and_then(|entry| entry.get(form))
            .and_then(Value::as_str)
            .ok_or_else(|| ResizeError::MissingMessage(key.to_string()))
    }

    /// Timestamp format for log entries, with a sane default when the
    /// catalog does not define one.
    pub fn date_format(&self) -> &str {
        self.output("date_format").unwrap_or(FALLBACK_DATE_FORMAT)
    }
}

/// Replaces `{name}` placeholders in a message template.
pub fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut message = template.to_string();
    for (name, value) in substitutions {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}

/// Lists the `ll_LL` catalogs found in `languages_dir` (e.g. `["en_US", "pt_BR"]`).
pub fn available_languages(languages_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(languages_dir) else {
        return Vec::new();
    };

    let mut languages: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                return None;
            }
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|stem| LANGUAGE_NAME.is_match(stem))
                .map(str::to_string)
        })
        .collect();
    languages.sort();
    languages
}

/// Checks that a catalog exists for `language`. The embedded default always
/// counts as available.
pub fn validate_language(languages_dir: &Path, language: &str) -> Result<()> {
    if language == DEFAULT_LANGUAGE || available_languages(languages_dir).iter().any(|l| l == language)
    {
        Ok(())
    } else {
        Err(ResizeError::UnknownLanguage(language.to_string()))
    }
}

/// Catalogs are read as UTF-8; only UTF-8 spellings are accepted.
pub fn validate_encoding(encoding: &str) -> Result<()> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(()),
        _ => Err(ResizeError::UnsupportedEncoding(encoding.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalog_has_core_keys() {
        let messages = Messages::embedded();
        for key in [
            "input_size_prompt",
            "invalid_size_error",
            "try_again_prompt",
            "file_not_resized",
            "non_image_error",
            "invalid_dir_error",
            "check_log",
        ] {
            assert!(messages.output(key).is_ok(), "missing key {}", key);
        }
    }

    #[test]
    fn test_output_missing_key() {
        let messages = Messages::embedded();
        assert!(matches!(
            messages.output("no_such_key"),
            Err(ResizeError::MissingMessage(_))
        ));
    }

    #[test]
    fn test_output_plural_forms() {
        let messages = Messages::embedded();
        let singular = messages.output_plural("files_resized", 1).unwrap();
        let plural = messages.output_plural("files_resized", 3).unwrap();
        assert_ne!(singular, plural);
        // Zero files still reads as plural
        assert_eq!(messages.output_plural("files_resized", 0).unwrap(), plural);
    }

    #[test]
    fn test_fill_substitutes_placeholders() {
        let message = fill(
            "\"{file_name}\" was not resized to {new_largest_dimension}px",
            &[("file_name", "cat.jpg"), ("new_largest_dimension", "800")],
        );
        assert_eq!(message, "\"cat.jpg\" was not resized to 800px");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{who} did it", &[("other", "x")]), "{who} did it");
    }

    #[test]
    fn test_available_languages_filters_names() {
        let dir = TempDir::new().unwrap();
        for name in ["en_US.json", "pt_BR.json", "notalang.json", "es_ar.json", "readme.txt"] {
            File::create(dir.path().join(name))
                .unwrap()
                .write_all(b"{}")
                .unwrap();
        }

        let languages = available_languages(dir.path());
        assert_eq!(languages, vec!["en_US".to_string(), "pt_BR".to_string()]);
    }

    #[test]
    fn test_load_unknown_language() {
        let dir = TempDir::new().unwrap();
        let result = Messages::load(dir.path(), "xx_XX");
        assert!(matches!(result, Err(ResizeError::UnknownLanguage(_))));
    }

    #[test]
    fn test_load_default_language_without_catalog_dir() {
        let dir = TempDir::new().unwrap();
        let messages = Messages::load(dir.path(), "en_US").unwrap();
        assert_eq!(messages.language(), "en_US");
        assert!(messages.output("input_size_prompt").is_ok());
    }

    #[test]
    fn test_validate_encoding() {
        assert!(validate_encoding("utf-8").is_ok());
        assert!(validate_encoding("UTF-8").is_ok());
        assert!(validate_encoding("utf8").is_ok());
        assert!(matches!(
            validate_encoding("latin-1"),
            Err(ResizeError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_date_format_fallback() {
        let messages = Messages::embedded();
        assert!(!messages.date_format().is_empty());
    }
}
