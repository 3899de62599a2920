// src/report/mod.rs
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::dataset::{EnrollmentGrid, FIRST_GRADE, FIRST_YEAR, YEARS};
use crate::directory::SchoolDirectory;
use crate::error::QueryError;
use crate::stats::{GlobalSummary, SchoolSummary};

pub const BANNER: &str = "School Enrollment Statistics";
const PROMPT: &str = "\nEnter a valid school code (e.g., 1224): ";

/// How a run ended. A rejected query is a normal ending, not a failure.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Rejected(QueryError),
}

/// Parse console input as a school code, ignoring surrounding whitespace.
pub fn parse_code(raw: &str) -> Result<i64, QueryError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| QueryError::InvalidCode(trimmed.to_string()))
}

/// Renders a figure that is absent when every underlying count is missing.
struct Figure(Option<i64>);

impl Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("n/a"),
        }
    }
}

/// Drives one query against a grid and its directory.
pub struct Report<'a> {
    grid: &'a EnrollmentGrid,
    directory: &'a SchoolDirectory,
}

impl<'a> Report<'a> {
    pub fn new(grid: &'a EnrollmentGrid, directory: &'a SchoolDirectory) -> Self {
        Self { grid, directory }
    }

    /// Print the grid shape, read one school code from `input`, then print the
    /// school report followed by the global report. A bad or unknown code
    /// prints a single error line and skips both reports.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<Outcome> {
        writeln!(out, "{}", BANNER)?;
        self.write_shape(out)?;

        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("Failed to read school code")?;

        let (code, index, name) = match self.resolve(&line) {
            Ok(found) => found,
            Err(err) => {
                warn!(%err, "query rejected");
                writeln!(out, "Error: {}", err)?;
                return Ok(Outcome::Rejected(err));
            }
        };
        info!(code, index, "resolved school");

        writeln!(out, "\n***Requested School Statistics***")?;
        self.write_school(out, code, index, name)?;

        writeln!(out, "\n***General Statistics for All Schools***\n")?;
        self.write_global(out)?;
        Ok(Outcome::Completed)
    }

    fn resolve(&self, raw: &str) -> Result<(i64, usize, &'a str), QueryError> {
        let code = parse_code(raw)?;
        let (index, name) = self.directory.index_of(code)?;
        Ok((code, index, name))
    }

    pub fn write_shape<W: Write>(&self, out: &mut W) -> Result<()> {
        let dims: Vec<String> = self.grid.shape().iter().map(|d| d.to_string()).collect();
        writeln!(out, "\nShape of full data array: ({})", dims.join(", "))?;
        writeln!(out, "Dimensions of full data array: {}", self.grid.ndim())?;
        Ok(())
    }

    pub fn write_school<W: Write>(
        &self,
        out: &mut W,
        code: i64,
        index: usize,
        name: &str,
    ) -> Result<()> {
        let summary = SchoolSummary::compute(self.grid, index).with_context(|| {
            format!(
                "school {} maps to position {} outside the enrollment grid",
                code, index
            )
        })?;

        writeln!(out, "\nSchool Name: {}, School Code: {}", name, code)?;
        for (g, mean) in summary.grade_means.iter().enumerate() {
            writeln!(
                out,
                "Mean enrollment for Grade {}: {}",
                FIRST_GRADE + g,
                Figure(*mean)
            )?;
        }

        writeln!(
            out,
            "\nHighest enrollment for a single grade: {}",
            Figure(summary.highest)
        )?;
        writeln!(
            out,
            "Lowest enrollment for a single grade: {}",
            Figure(summary.lowest)
        )?;

        for (y, total) in summary.year_totals.iter().enumerate() {
            writeln!(out, "Total enrollment for {}: {}", FIRST_YEAR + y, total)?;
        }

        writeln!(out, "Total ten year enrollment: {}", summary.ten_year_total)?;
        writeln!(
            out,
            "Mean total enrollment over 10 years: {}",
            summary.ten_year_mean_total
        )?;

        match summary.median_over_threshold {
            Some(median) => writeln!(
                out,
                "For all enrollments over 500, the median value was: {}",
                median
            )?,
            None => writeln!(out, "No enrollments over 500.")?,
        }
        Ok(())
    }

    pub fn write_global<W: Write>(&self, out: &mut W) -> Result<()> {
        let summary = GlobalSummary::compute(self.grid);
        writeln!(
            out,
            "Mean enrollment in {}: {}",
            FIRST_YEAR,
            Figure(summary.first_year_mean)
        )?;
        writeln!(
            out,
            "Mean enrollment in {}: {}",
            FIRST_YEAR + YEARS - 1,
            Figure(summary.last_year_mean)
        )?;
        writeln!(
            out,
            "Total graduating class of {}: {}",
            FIRST_YEAR + YEARS - 1,
            summary.graduating_class
        )?;
        writeln!(
            out,
            "Highest enrollment for a single grade: {}",
            Figure(summary.highest)
        )?;
        writeln!(out, "Lowest enrollment for a grade: {}", Figure(summary.lowest))?;
        Ok(())
    }
}
