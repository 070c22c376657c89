pub const DEFAULT_IMAGES_DIR: &str = "./imgs";
pub const DEFAULT_RESIZED_DIR: &str = "./imgs/resized";
pub const DEFAULT_LANGUAGE: &str = "en_US";
pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_LOG_FILE: &str = "log.txt";

pub const LANGUAGES_DIR: &str = "./language";
pub const CONFIG_FILE: &str = "./config.json";

/// VCS placeholder kept in otherwise-empty image directories; always skipped.
pub const IGNORED_FILE_NAME: &str = ".gitignore";

/// Timestamp format used when the catalog does not supply a `date_format` key.
pub const FALLBACK_DATE_FORMAT: &str = "%d/%b/%Y %H:%M:%S";
