//! tt-batch — batch entry point for the rust_tt single-track scheduler.
//!
//! Reads a segments table and a vehicle requests table from disk, schedules
//! every vehicle in file order, and writes `schedule.csv` plus the chart bars
//! in `occupancy.csv` to the output directory.
//!
//! ```bash
//! cargo run --release -p tt-batch -- \
//!     --segments demos/batch/data/edges.csv \
//!     --trains   demos/batch/data/trains.csv \
//!     --out-dir  outputs --dwell 2 --headway 2
//! ```
//!
//! Set `RUST_LOG=debug` to see every slot bump.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};

use tt_core::SchedulerConfig;
use tt_network::load_segments_csv;
use tt_output::{occupancy_bars, CsvWriter, OutputWriter};
use tt_schedule::{load_requests_csv, schedule_all};

/// Compute a conflict-free timetable for vehicles sharing single-track segments.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Segments table (`source,target,travel_min`)
    #[clap(long, value_parser, default_value = "data/edges.csv")]
    segments: PathBuf,

    /// Vehicle requests table (`train_id,route,start_time`)
    #[clap(long, value_parser, default_value = "data/trains.csv")]
    trains: PathBuf,

    /// Directory receiving `schedule.csv` and `occupancy.csv`
    #[clap(long, value_parser, default_value = "outputs")]
    out_dir: PathBuf,

    /// Dwell at intermediate stations, in minutes
    #[clap(long, value_parser, default_value_t = 2)]
    dwell: u32,

    /// Minimum buffer between vehicles on one segment, in minutes
    #[clap(long, value_parser, default_value_t = 2)]
    headway: u32,

    /// Also write `timetable.db` (requires the `sqlite` feature)
    #[clap(long, action)]
    sqlite: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let t0 = Instant::now();

    // ── Inputs ────────────────────────────────────────────────────────────
    let network = load_segments_csv(&args.segments)
        .with_context(|| format!("loading segments from {}", args.segments.display()))?;
    let requests = load_requests_csv(&args.trains)
        .with_context(|| format!("loading trains from {}", args.trains.display()))?;
    info!(
        "network: {} stations, {} segments; {} trains",
        network.station_count(),
        network.segment_count(),
        requests.len(),
    );

    // ── Schedule ──────────────────────────────────────────────────────────
    let config = SchedulerConfig::new(args.dwell, args.headway);
    let schedule = schedule_all(&network, config, &requests)?;

    if let Some((key, a, b)) = schedule.ledger.find_conflict(config.headway()) {
        error!(
            "{key}: {} [{}, {}) vs {} [{}, {})",
            a.train, a.start.0, a.end.0, b.train, b.start.0, b.end.0,
        );
        bail!("headway invariant violated on segment {key}");
    }

    let rows = schedule.rows();
    let bars = occupancy_bars(&rows)?;

    // ── Outputs ───────────────────────────────────────────────────────────
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut csv = CsvWriter::new(&args.out_dir)?;
    csv.write_timetable(&rows)?;
    csv.write_bars(&bars)?;
    csv.finish()?;

    if args.sqlite {
        write_sqlite(&args, &rows, &bars)?;
    }

    println!("Saved schedule -> {}", args.out_dir.join("schedule.csv").display());
    println!("Saved chart bars -> {}", args.out_dir.join("occupancy.csv").display());
    info!("done in {:.1?}", t0.elapsed());
    Ok(())
}

#[cfg(feature = "sqlite")]
fn write_sqlite(
    args: &Args,
    rows: &[tt_schedule::TimetableRow],
    bars: &[tt_output::OccupancyBar],
) -> Result<()> {
    let mut db = tt_output::SqliteWriter::new(&args.out_dir)?;
    db.write_timetable(rows)?;
    db.write_bars(bars)?;
    db.finish()?;
    println!("Saved database -> {}", args.out_dir.join("timetable.db").display());
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn write_sqlite(
    _args: &Args,
    _rows: &[tt_schedule::TimetableRow],
    _bars: &[tt_output::OccupancyBar],
) -> Result<()> {
    bail!("--sqlite requires building tt-batch with the `sqlite` feature")
}
