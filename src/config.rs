use std::{env, path::PathBuf};

/// Env var that points the run at a different directory CSV.
pub const DIRECTORY_CSV_VAR: &str = "SCHOOL_DIRECTORY_CSV";

const DEFAULT_DIRECTORY_CSV: &str = "data/school_directory.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV holding the `School Code` / `School Name` columns.
    pub directory_csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_csv: PathBuf::from(DEFAULT_DIRECTORY_CSV),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(DIRECTORY_CSV_VAR).filter(|p| !p.trim().is_empty()) {
            config.directory_csv = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_bundled_csv() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(
            config.directory_csv,
            PathBuf::from("data/school_directory.csv")
        );
    }

    #[test]
    fn test_override_from_env() {
        let config = Config::from_lookup(|key| {
            (key == DIRECTORY_CSV_VAR).then(|| "/srv/schools.csv".to_string())
        });
        assert_eq!(config.directory_csv, PathBuf::from("/srv/schools.csv"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
