// src/stats/mod.rs
//! NaN-aware aggregates over views of the enrollment grid.
//!
//! Every reduction skips missing (NaN) counts: they add nothing to a sum, are
//! not counted in a mean's divisor and never become an extremum. Results are
//! reported as whole students, truncated toward zero.
use ndarray::{ArrayBase, Axis, Data, Dimension, RemoveAxis};

use crate::dataset::{EnrollmentGrid, GRADES, YEARS};

/// Only counts strictly above this feed the median report.
pub const MEDIAN_THRESHOLD: f64 = 500.0;

/// Grade index of grade 12 on the last axis.
const GRADUATING_GRADE: usize = GRADES - 1;

fn present<S, D>(view: &ArrayBase<S, D>) -> impl Iterator<Item = f64> + '_
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    view.iter().copied().filter(|v| !v.is_nan())
}

pub fn nan_sum<S, D>(view: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    present(view).sum()
}

pub fn nan_mean<S, D>(view: &ArrayBase<S, D>) -> Option<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let (sum, count) = present(view).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn nan_max<S, D>(view: &ArrayBase<S, D>) -> Option<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    present(view).reduce(f64::max)
}

pub fn nan_min<S, D>(view: &ArrayBase<S, D>) -> Option<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    present(view).reduce(f64::min)
}

/// Median of the non-missing values; even counts average the two middle values.
pub fn nan_median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Mean of one (school, grade) across all years. `None` when every year is missing.
pub fn mean_across_years(grid: &EnrollmentGrid, school: usize, grade: usize) -> Option<i64> {
    let view = grid.school(school)?;
    if grade >= view.len_of(Axis(1)) {
        return None;
    }
    nan_mean(&view.index_axis(Axis(1), grade)).map(|m| m as i64)
}

pub fn max_cell<S, D>(view: &ArrayBase<S, D>) -> Option<i64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nan_max(view).map(|v| v as i64)
}

pub fn min_cell<S, D>(view: &ArrayBase<S, D>) -> Option<i64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nan_min(view).map(|v| v as i64)
}

/// Sum of everything recorded for `year` in a view whose first axis is the year
/// axis (a school's slice or the whole grid). Out-of-range years sum to zero.
pub fn year_total<S, D>(view: &ArrayBase<S, D>, year: usize) -> i64
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    if year >= view.len_of(Axis(0)) {
        return 0;
    }
    nan_sum(&view.index_axis(Axis(0), year)) as i64
}

pub fn ten_year_total<S, D>(view: &ArrayBase<S, D>) -> i64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nan_sum(view) as i64
}

/// The ten-year total divided by ten, rounded toward negative infinity.
pub fn ten_year_mean_total<S, D>(view: &ArrayBase<S, D>) -> i64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ten_year_total(view).div_euclid(YEARS as i64)
}

/// Median of the counts strictly greater than `threshold`, or `None` when no
/// count clears it.
pub fn median_over_threshold<S, D>(view: &ArrayBase<S, D>, threshold: f64) -> Option<i64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nan_median(present(view).filter(|&v| v > threshold)).map(|m| m as i64)
}

/// Grade 12 of the final year, summed over every school.
pub fn graduating_class_total(grid: &EnrollmentGrid) -> i64 {
    grid.year(YEARS - 1)
        .map(|year| nan_sum(&year.index_axis(Axis(1), GRADUATING_GRADE)) as i64)
        .unwrap_or(0)
}

/// Mean single-grade enrollment over all schools for one year.
pub fn year_mean(grid: &EnrollmentGrid, year: usize) -> Option<i64> {
    nan_mean(&grid.year(year)?).map(|m| m as i64)
}

/// Everything the per-school report shows, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolSummary {
    /// Mean per grade, grade 10 first.
    pub grade_means: [Option<i64>; GRADES],
    pub highest: Option<i64>,
    pub lowest: Option<i64>,
    /// Total per year, 2013 first.
    pub year_totals: [i64; YEARS],
    pub ten_year_total: i64,
    pub ten_year_mean_total: i64,
    pub median_over_threshold: Option<i64>,
}

impl SchoolSummary {
    /// `None` if `school` is not an index on the grid's school axis.
    pub fn compute(grid: &EnrollmentGrid, school: usize) -> Option<Self> {
        let view = grid.school(school)?;
        Some(Self {
            grade_means: std::array::from_fn(|g| mean_across_years(grid, school, g)),
            highest: max_cell(&view),
            lowest: min_cell(&view),
            year_totals: std::array::from_fn(|y| year_total(&view, y)),
            ten_year_total: ten_year_total(&view),
            ten_year_mean_total: ten_year_mean_total(&view),
            median_over_threshold: median_over_threshold(&view, MEDIAN_THRESHOLD),
        })
    }
}

/// Dataset-wide figures for the closing report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSummary {
    pub first_year_mean: Option<i64>,
    pub last_year_mean: Option<i64>,
    pub graduating_class: i64,
    pub highest: Option<i64>,
    pub lowest: Option<i64>,
}

impl GlobalSummary {
    pub fn compute(grid: &EnrollmentGrid) -> Self {
        let all = grid.view();
        Self {
            first_year_mean: year_mean(grid, 0),
            last_year_mean: year_mean(grid, YEARS - 1),
            graduating_class: graduating_class_total(grid),
            highest: max_cell(&all),
            lowest: min_cell(&all),
        }
    }
}
