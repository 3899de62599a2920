// src/directory/mod.rs
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{collections::BTreeMap, fs::File, io::Read, path::Path};
use tracing::{debug, info, warn};

use crate::dataset::EnrollmentGrid;
use crate::error::QueryError;

const CODE_COLUMN: &str = "School Code";
const NAME_COLUMN: &str = "School Name";

/// The school expected at grid position 0 whenever it is listed.
const ANCHOR_CODE: i64 = 1224;

/// One (code, name) pair from the directory CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolEntry {
    pub code: i64,
    pub name: String,
}

/// Schools sorted by ascending code. An entry's position is its index on the
/// enrollment grid's school axis.
#[derive(Debug, Clone, Default)]
pub struct SchoolDirectory {
    entries: Vec<SchoolEntry>,
}

impl SchoolDirectory {
    /// Read the directory CSV at `path`.
    #[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .with_context(|| format!("Failed to open school directory: {:?}", path.as_ref()))?;
        let directory = Self::from_reader(file)
            .with_context(|| format!("Failed to read school directory: {:?}", path.as_ref()))?;
        info!(schools = directory.len(), "loaded school directory");
        Ok(directory)
    }

    /// Parse directory rows from any CSV source with a header row.
    ///
    /// Rows with an empty code or name are skipped, the first row seen for a
    /// code wins, and the result is sorted by code.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().context("CSV header row unreadable")?.clone();
        let column = |wanted: &str| headers.iter().position(|h| h == wanted);
        let (Some(code_col), Some(name_col)) = (column(CODE_COLUMN), column(NAME_COLUMN)) else {
            warn!(?headers, "directory is missing the code or name column");
            return Ok(Self::default());
        };

        let mut by_code: BTreeMap<i64, String> = BTreeMap::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;

            let code = record.get(code_col).map(str::trim).unwrap_or_default();
            let name = record.get(name_col).map(str::trim).unwrap_or_default();
            if code.is_empty() || name.is_empty() {
                debug!(record = idx, "skipping row without code or name");
                continue;
            }

            let code: i64 = code
                .parse()
                .with_context(|| format!("invalid school code {:?} at record {}", code, idx))?;
            by_code.entry(code).or_insert_with(|| name.to_string());
        }

        let entries = by_code
            .into_iter()
            .map(|(code, name)| SchoolEntry { code, name })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SchoolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grid position and name of the school with `code`.
    pub fn index_of(&self, code: i64) -> Result<(usize, &str), QueryError> {
        self.entries
            .binary_search_by_key(&code, |e| e.code)
            .map(|idx| (idx, self.entries[idx].name.as_str()))
            .map_err(|_| QueryError::NotFound(code))
    }

    /// Check that directory positions line up with the grid's school axis.
    pub fn ensure_aligned(&self, grid: &EnrollmentGrid) -> Result<()> {
        if self.len() != grid.school_count() {
            bail!(
                "school directory lists {} schools but the enrollment grid has {}",
                self.len(),
                grid.school_count()
            );
        }
        if let Ok((idx, name)) = self.index_of(ANCHOR_CODE) {
            if idx != 0 {
                bail!(
                    "school {} ({}) sits at directory position {}, expected 0",
                    ANCHOR_CODE,
                    name,
                    idx
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{EnrollmentGrid, RECORD_LEN, YEARS};
    use anyhow::Result;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,school_stats::directory=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn directory(csv: &str) -> Result<SchoolDirectory> {
        SchoolDirectory::from_reader(Cursor::new(csv.as_bytes().to_vec()))
    }

    fn codes(dir: &SchoolDirectory) -> Vec<i64> {
        dir.entries().iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_lookup_resolves_position_and_name() -> Result<()> {
        let dir = directory(
            "School Year,School Code,School Name,Grade\n\
             2022-2023,1227,Forest Heights,10\n\
             2022-2023,1224,Our Lady of the Evergreens,10\n",
        )?;
        assert_eq!(dir.index_of(1227), Ok((1, "Forest Heights")));
        assert_eq!(dir.index_of(1224), Ok((0, "Our Lady of the Evergreens")));
        assert_eq!(dir.index_of(9999), Err(QueryError::NotFound(9999)));
        Ok(())
    }

    #[test]
    fn test_first_seen_code_wins_and_sorted() -> Result<()> {
        let dir = directory(
            "School Code,School Name\n\
             1300,Later\n\
             1250,First Name\n\
             1250,Second Name\n\
             1100,Earliest\n",
        )?;
        assert_eq!(codes(&dir), vec![1100, 1250, 1300]);
        assert_eq!(dir.entries()[1].name, "First Name");
        assert!(codes(&dir).windows(2).all(|w| w[0] < w[1]));
        Ok(())
    }

    #[test]
    fn test_rows_missing_fields_are_skipped() -> Result<()> {
        let dir = directory(
            "School Code,School Name,Enrollment\n\
             1224,  Our Lady of the Evergreens  ,100\n\
             ,Nameless,5\n\
             1230,,5\n\
             1231\n",
        )?;
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.entries()[0].name, "Our Lady of the Evergreens");
        Ok(())
    }

    #[test]
    fn test_non_integer_code_is_a_format_error() {
        let err = directory("School Code,School Name\nabc,Nowhere\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid school code"), "{err:#}");
    }

    #[test]
    fn test_missing_columns_yield_empty_directory() -> Result<()> {
        let dir = directory("Code,Name\n1224,Our Lady of the Evergreens\n")?;
        assert!(dir.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        init_test_logging();
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "School Code,School Name")?;
        writeln!(tmp, "1227,Forest Heights")?;
        writeln!(tmp, "\"1224\",\"Our Lady of the Evergreens\"")?;
        tmp.flush()?;

        let dir = SchoolDirectory::load(tmp.path())?;
        assert_eq!(codes(&dir), vec![1224, 1227]);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = SchoolDirectory::load("does/not/exist.csv").unwrap_err();
        assert!(err.to_string().contains("Failed to open"), "{err}");
    }

    #[test]
    fn test_bundled_directory_aligns_with_given_grid() -> Result<()> {
        init_test_logging();
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/school_directory.csv");
        let dir = SchoolDirectory::load(path)?;
        let grid = EnrollmentGrid::given()?;
        dir.ensure_aligned(&grid)?;
        assert_eq!(dir.index_of(1224)?.0, 0);
        assert_eq!(dir.index_of(1227)?, (1, "Forest Heights"));
        Ok(())
    }

    #[test]
    fn test_alignment_rejects_wrong_length() -> Result<()> {
        let grid = EnrollmentGrid::from_years(&vec![vec![0.0; RECORD_LEN]; YEARS])?;
        let dir = directory("School Code,School Name\n1224,Our Lady of the Evergreens\n")?;
        let err = dir.ensure_aligned(&grid).unwrap_err();
        assert!(err.to_string().contains("lists 1 schools"), "{err}");
        Ok(())
    }

    #[test]
    fn test_alignment_rejects_misplaced_anchor() -> Result<()> {
        let grid = EnrollmentGrid::from_years(&vec![vec![0.0; RECORD_LEN]; YEARS])?;
        let mut csv = String::from("School Code,School Name\n");
        for code in 1200..1220 {
            if code == 1219 {
                csv.push_str("1224,Our Lady of the Evergreens\n");
            } else {
                csv.push_str(&format!("{},School {}\n", code, code));
            }
        }
        let dir = directory(&csv)?;
        assert_eq!(dir.len(), 20);
        let err = dir.ensure_aligned(&grid).unwrap_err();
        assert!(err.to_string().contains("expected 0"), "{err}");
        Ok(())
    }
}
