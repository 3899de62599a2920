use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use tracing_subscriber::{fmt, EnvFilter};

use school_stats::{
    config::Config,
    stats::{SchoolSummary, MEDIAN_THRESHOLD},
    EnrollmentGrid, SchoolDirectory,
};

fn or_dash(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting school summary.");

    let config = Config::from_env();
    let grid = EnrollmentGrid::given().context("Failed to build enrollment grid")?;
    let directory = SchoolDirectory::load(&config.directory_csv)?;
    directory
        .ensure_aligned(&grid)
        .context("School directory does not match enrollment grid")?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let median_header = format!("Median > {}", MEDIAN_THRESHOLD);
    table.add_row(Row::new(vec![
        Cell::new("Code").style_spec("bFg"),
        Cell::new("School Name").style_spec("bFg"),
        Cell::new("10y Total").style_spec("bFg"),
        Cell::new("Mean Total").style_spec("bFg"),
        Cell::new("Highest").style_spec("bFg"),
        Cell::new("Lowest").style_spec("bFg"),
        Cell::new(&median_header).style_spec("bFg"),
    ]));

    for (index, entry) in directory.entries().iter().enumerate() {
        let summary = SchoolSummary::compute(&grid, index)
            .with_context(|| format!("no grid row for school {}", entry.code))?;
        table.add_row(Row::new(vec![
            Cell::new(&entry.code.to_string()),
            Cell::new(&entry.name),
            Cell::new(&summary.ten_year_total.to_string()).style_spec("r"),
            Cell::new(&summary.ten_year_mean_total.to_string()).style_spec("r"),
            Cell::new(&or_dash(summary.highest)).style_spec("r"),
            Cell::new(&or_dash(summary.lowest)).style_spec("r"),
            Cell::new(&or_dash(summary.median_over_threshold)).style_spec("r"),
        ]));
    }

    println!("\n--- School Enrollment Summary ---");
    table.printstd();

    tracing::info!(schools = directory.len(), "School summary finished.");
    Ok(())
}
