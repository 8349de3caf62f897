use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// The ordered list of storefront domains to extract, as read from
/// `config/stores.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoresFile {
    #[serde(default)]
    pub stores: Vec<String>,
}

/// Load the store list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_stores(path: &Path) -> Result<StoresFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StoresFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_stores(&content)
}

/// Parses the store list, trimming whitespace around each entry.
///
/// Entries are not validated here: a blank or unparseable domain is skipped
/// with an error log when the run reaches it, and duplicates are fetched once
/// per occurrence.
fn parse_stores(content: &str) -> Result<StoresFile, ConfigError> {
    let mut stores_file: StoresFile = serde_yaml::from_str(content)?;
    for store in &mut stores_file.stores {
        *store = store.trim().to_string();
    }

    Ok(stores_file)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_store_list_in_order() {
        let yaml = "stores:\n  - allbirds.com\n  - uk.huel.com\n  - https://bombas.com\n";
        let parsed = parse_stores(yaml).unwrap();
        assert_eq!(
            parsed.stores,
            vec!["allbirds.com", "uk.huel.com", "https://bombas.com"]
        );
    }

    #[test]
    fn trims_whitespace_around_entries() {
        let parsed = parse_stores("stores:\n  - '  allbirds.com  '\n").unwrap();
        assert_eq!(parsed.stores, vec!["allbirds.com"]);
    }

    #[test]
    fn missing_stores_key_yields_empty_list() {
        let parsed = parse_stores("{}").unwrap();
        assert!(parsed.stores.is_empty());
    }

    #[test]
    fn keeps_blank_entries_for_the_run_to_skip() {
        let parsed = parse_stores("stores:\n  - allbirds.com\n  - '   '\n").unwrap();
        assert_eq!(parsed.stores, vec!["allbirds.com", ""]);
    }

    #[test]
    fn keeps_duplicate_entries() {
        let parsed = parse_stores("stores:\n  - allbirds.com\n  - AllBirds.com\n").unwrap();
        assert_eq!(parsed.stores, vec!["allbirds.com", "AllBirds.com"]);
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = parse_stores("stores: [allbirds.com").unwrap_err();
        assert!(matches!(err, ConfigError::StoresFileParse(_)));
    }

    #[test]
    fn load_stores_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stores:\n  - allbirds.com\n  # - gymshark.com").unwrap();
        let parsed = load_stores(file.path()).unwrap();
        assert_eq!(parsed.stores, vec!["allbirds.com"]);
    }

    #[test]
    fn load_stores_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_stores(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(
            matches!(err, ConfigError::StoresFileIo { ref path, .. } if path.ends_with("nope.yaml")),
            "expected StoresFileIo, got: {err:?}"
        );
    }
}
