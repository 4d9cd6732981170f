//! monks — run the doctor-visit scheduler on a roster and print the end time.
//!
//! ```text
//! monks < roster.txt                      # text roster on stdin
//! monks roster.csv --csv --monks 3 --doctors 2
//! monks --random 10000 --doctors 20 --seed 7 --events output/
//! ```
//!
//! `-v` (or `RUST_LOG=debug`) logs every doctor visit.

mod logging;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use mc_core::AdmissionPolicy;
use mc_output::{CsvWriter, SimOutputObserver};
use mc_schedule::{
    Roster, SyntheticConfig, load_roster_csv, load_roster_file, load_roster_text, synthetic_roster,
};
use mc_sim::{LogObserver, SimBuilder};

/// Advance monks through their doctors one tick at a time.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster file.  Reads the text format from stdin when omitted.
    input: Option<PathBuf>,

    /// Parse `input` as CSV (`monk_id,arrival_tick,stops`).
    #[arg(long, requires = "input")]
    csv: bool,

    /// Monk count for CSV or synthetic rosters.
    #[arg(long)]
    monks: Option<usize>,

    /// Doctor count for CSV or synthetic rosters.
    #[arg(long)]
    doctors: Option<usize>,

    /// Generate a synthetic roster of this many monks instead of reading one.
    #[arg(long, conflicts_with_all = ["input", "csv"], requires = "doctors")]
    random: Option<usize>,

    /// Longest generated itinerary.
    #[arg(long, default_value_t = 5)]
    max_stops: usize,

    /// Latest generated arrival tick.
    #[arg(long, default_value_t = 10)]
    max_arrival: u64,

    /// Seed for the synthetic roster.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Admit every eligible monk per doctor per tick instead of one.
    #[arg(long)]
    drain: bool,

    /// Abort if the run needs more ticks than this.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write `visits.csv` and `tick_summaries.csv` into this directory.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load(args: &Args) -> Result<Roster> {
    if let Some(monk_count) = args.random {
        let Some(doctor_count) = args.doctors else {
            bail!("--random needs --doctors");
        };
        let config = SyntheticConfig {
            monk_count,
            doctor_count,
            max_stops: args.max_stops,
            max_arrival: args.max_arrival,
            seed: args.seed,
        };
        return Ok(synthetic_roster(&config)?);
    }

    match (&args.input, args.csv) {
        (Some(path), true) => {
            let (Some(monks), Some(doctors)) = (args.monks, args.doctors) else {
                bail!("--csv needs --monks and --doctors");
            };
            load_roster_csv(path, monks, doctors)
                .with_context(|| format!("reading {}", path.display()))
        }
        (Some(path), false) => {
            load_roster_file(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, _) => load_roster_text(std::io::stdin().lock()).context("reading roster from stdin"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    // 1. Roster.
    let roster = load(&args)?;
    log::info!(
        "roster: {} monks, {} doctors, {} visits",
        roster.monk_count(),
        roster.doctor_count,
        roster.total_visits()
    );

    // 2. Sim.
    let mut builder = SimBuilder::from_roster(roster);
    if args.drain {
        builder = builder.admission(AdmissionPolicy::DrainEligible);
    }
    if let Some(n) = args.max_ticks {
        builder = builder.max_ticks(n);
    }
    let mut sim = builder.build()?;

    // 3. Run, optionally recording the visit stream.
    let t0 = Instant::now();
    let end = match &args.events {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let writer = CsvWriter::new(dir)?;
            let mut obs = (LogObserver, SimOutputObserver::new(writer));
            let end = sim.run(&mut obs)?;
            if let Some(e) = obs.1.take_error() {
                log::error!("output error: {e}");
            }
            log::info!("visits.csv: {} rows", obs.1.rows_written());
            end
        }
        None => sim.run(&mut LogObserver)?,
    };
    log::info!(
        "{} admissions in {:.3} s",
        sim.admissions(),
        t0.elapsed().as_secs_f64()
    );

    println!("end time = {}", end.0);
    Ok(())
}
