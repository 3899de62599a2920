// src/dataset/mod.rs
pub mod given_data;

use anyhow::{bail, Context, Result};
use ndarray::{Array3, ArrayView2, ArrayView3, Axis};
use tracing::debug;

/// Number of school years covered, 2013 through 2022.
pub const YEARS: usize = 10;
/// Number of schools on the second axis.
pub const SCHOOLS: usize = 20;
/// Number of grades per school, 10 through 12.
pub const GRADES: usize = 3;

pub const FIRST_YEAR: usize = 2013;
pub const FIRST_GRADE: usize = 10;

/// Length of one flat yearly record.
pub const RECORD_LEN: usize = SCHOOLS * GRADES;

/// Enrollment counts indexed by (year, school, grade).
///
/// Missing counts are stored as NaN. The grid is built once and only ever
/// handed out as read-only views.
#[derive(Debug, Clone)]
pub struct EnrollmentGrid {
    data: Array3<f64>,
}

impl EnrollmentGrid {
    /// Stack ten flat yearly records (schools × grades, row-major) into a
    /// (10, 20, 3) grid. Errors if there are not exactly ten records or any
    /// record is not exactly 60 values long.
    pub fn from_years<R: AsRef<[f64]>>(years: &[R]) -> Result<Self> {
        if years.len() != YEARS {
            bail!("expected {} yearly records, got {}", YEARS, years.len());
        }

        let mut flat = Vec::with_capacity(YEARS * RECORD_LEN);
        for (i, record) in years.iter().enumerate() {
            let record = record.as_ref();
            if record.len() != RECORD_LEN {
                bail!(
                    "record for {} has {} values, expected {}",
                    FIRST_YEAR + i,
                    record.len(),
                    RECORD_LEN
                );
            }
            flat.extend_from_slice(record);
        }

        let data = Array3::from_shape_vec((YEARS, SCHOOLS, GRADES), flat)
            .context("reshaping yearly records into enrollment grid")?;
        debug!(shape = ?data.shape(), "built enrollment grid");
        Ok(Self { data })
    }

    /// The bundled 2013–2022 enrollment records.
    pub fn given() -> Result<Self> {
        Self::from_years(&given_data::RECORDS)
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn view(&self) -> ArrayView3<'_, f64> {
        self.data.view()
    }

    /// Number of schools on the second axis.
    pub fn school_count(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// One school's (years, grades) slice, or `None` if `index` is out of range.
    pub fn school(&self, index: usize) -> Option<ArrayView2<'_, f64>> {
        (index < self.school_count()).then(|| self.data.index_axis(Axis(1), index))
    }

    /// One year's (schools, grades) slice, or `None` if `index` is out of range.
    pub fn year(&self, index: usize) -> Option<ArrayView2<'_, f64>> {
        (index < self.data.len_of(Axis(0))).then(|| self.data.index_axis(Axis(0), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn ramp_years() -> Vec<Vec<f64>> {
        (0..YEARS)
            .map(|y| (0..RECORD_LEN).map(|i| (y * 1000 + i) as f64).collect())
            .collect()
    }

    #[test]
    fn test_given_grid_shape() -> Result<()> {
        let grid = EnrollmentGrid::given()?;
        assert_eq!(grid.shape(), &[10, 20, 3]);
        assert_eq!(grid.ndim(), 3);
        assert_eq!(grid.school_count(), SCHOOLS);
        Ok(())
    }

    #[test]
    fn test_records_are_row_major() -> Result<()> {
        let grid = EnrollmentGrid::from_years(&ramp_years())?;
        let v = grid.view();
        // year 4, school 7, grade 2 => flat offset 7 * 3 + 2
        assert_eq!(v[[4, 7, 2]], 4023.0);
        assert_eq!(v[[0, 0, 0]], 0.0);
        assert_eq!(v[[9, 19, 2]], 9059.0);

        let school = grid.school(7).expect("school 7 exists");
        assert_eq!(school.shape(), &[10, 3]);
        assert_eq!(school[[4, 2]], 4023.0);

        let year = grid.year(4).expect("year 4 exists");
        assert_eq!(year.shape(), &[20, 3]);
        assert_eq!(year[[7, 2]], 4023.0);
        Ok(())
    }

    #[test]
    fn test_out_of_range_slices() -> Result<()> {
        let grid = EnrollmentGrid::from_years(&ramp_years())?;
        assert!(grid.school(SCHOOLS).is_none());
        assert!(grid.year(YEARS).is_none());
        Ok(())
    }

    #[test]
    fn test_rejects_short_record() {
        let mut years = ramp_years();
        years[3].pop();
        let err = EnrollmentGrid::from_years(&years).unwrap_err();
        assert!(err.to_string().contains("2016"), "{err}");
    }

    #[test]
    fn test_rejects_wrong_year_count() {
        let mut years = ramp_years();
        years.pop();
        assert!(EnrollmentGrid::from_years(&years).is_err());
    }

    #[test]
    fn test_missing_values_survive_construction() -> Result<()> {
        let mut years = ramp_years();
        years[0][5] = f64::NAN;
        let grid = EnrollmentGrid::from_years(&years)?;
        assert!(grid.view()[[0, 1, 2]].is_nan());
        Ok(())
    }
}
