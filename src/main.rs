use anyhow::{Context, Result};
use school_stats::{config::Config, report::Report, EnrollmentGrid, SchoolDirectory};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) load grid + directory ────────────────────────────────────
    let config = Config::from_env();
    let grid = EnrollmentGrid::given().context("building enrollment grid")?;
    let directory = SchoolDirectory::load(&config.directory_csv)?;
    directory
        .ensure_aligned(&grid)
        .context("school directory does not match enrollment grid")?;

    // ─── 3) one query, then both reports ─────────────────────────────
    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Report::new(&grid, &directory).run(stdin.lock(), &mut stdout.lock())?;
    info!(?outcome, "done");
    Ok(())
}
