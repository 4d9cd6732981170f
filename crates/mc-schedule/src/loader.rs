//! Roster loaders.
//!
//! # Text format
//!
//! Whitespace separated; line breaks are not significant.
//!
//! ```text
//! <monk_count> <doctor_count>
//! <arrival> <visit_count> <doctor_1> ... <doctor_visit_count>    × monk_count
//! ```
//!
//! Monk ids are assigned 1-based in input order.  A monk with
//! `visit_count = 0` lists no doctors.
//!
//! # CSV format
//!
//! ```csv
//! monk_id,arrival_tick,stops
//! 1,0,1 2
//! 2,0,1
//! ```
//!
//! `stops` is a space-separated doctor list.  Monks absent from the CSV
//! receive an empty plan.
//!
//! Neither loader range-checks doctor ids; out-of-range ids are rejected when
//! the monk is inserted into a [`Clinic`][crate::Clinic].

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mc_core::{DoctorId, Tick};

use crate::{MonkPlan, ScheduleError, ScheduleResult};

// ── Roster ────────────────────────────────────────────────────────────────────

/// A fully parsed input: the doctor count plus one plan per monk.
///
/// `plans[i]` belongs to `MonkId(i + 1)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub doctor_count: usize,
    pub plans:        Vec<MonkPlan>,
}

impl Roster {
    pub fn new(doctor_count: usize, plans: Vec<MonkPlan>) -> Self {
        Self { doctor_count, plans }
    }

    pub fn monk_count(&self) -> usize {
        self.plans.len()
    }

    /// Sum of all monks' stop counts; equals the number of admissions a
    /// complete run performs.
    pub fn total_visits(&self) -> usize {
        self.plans.iter().map(MonkPlan::visit_count).sum()
    }

    /// Longest itinerary, in stops.
    pub fn max_visits(&self) -> usize {
        self.plans.iter().map(MonkPlan::visit_count).max().unwrap_or(0)
    }

    /// Latest initial arrival tick.
    pub fn max_arrival(&self) -> Tick {
        self.plans.iter().map(|p| p.arrival).max().unwrap_or(Tick::ZERO)
    }
}

// ── Text format ───────────────────────────────────────────────────────────────

/// Load a roster in the text format from a file.
pub fn load_roster_file(path: &Path) -> ScheduleResult<Roster> {
    let file = std::fs::File::open(path)?;
    load_roster_text(file)
}

/// Like [`load_roster_file`] but accepts any `Read` source (stdin, a
/// `Cursor` in tests, …).
pub fn load_roster_text<R: Read>(mut reader: R) -> ScheduleResult<Roster> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = Tokens::new(&input);

    let monk_count = tokens.next_usize("monk count")?;
    let doctor_count = tokens.next_usize("doctor count")?;

    let mut plans = Vec::with_capacity(monk_count.min(1_000_000));
    for monk in 1..=monk_count {
        let arrival = Tick(tokens.next_u64(&format!("arrival tick of monk {monk}"))?);
        let visits = tokens.next_usize(&format!("visit count of monk {monk}"))?;
        let stops = (1..=visits)
            .map(|k| tokens.next_doctor(&format!("stop {k} of monk {monk}")))
            .collect::<ScheduleResult<Vec<_>>>()?;
        plans.push(MonkPlan::new(arrival, stops));
    }

    Ok(Roster::new(doctor_count, plans))
}

/// Whitespace tokenizer that names the missing value on early EOF.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self { inner: input.split_whitespace() }
    }

    fn next_u64(&mut self, what: &str) -> ScheduleResult<u64> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| ScheduleError::Parse(format!("unexpected end of input: expected {what}")))?;
        token.parse::<u64>().map_err(|_| {
            ScheduleError::Parse(format!("invalid {what} {token:?}: expected a non-negative integer"))
        })
    }

    fn next_usize(&mut self, what: &str) -> ScheduleResult<usize> {
        let n = self.next_u64(what)?;
        usize::try_from(n).map_err(|_| ScheduleError::Parse(format!("{what} {n} is too large")))
    }

    fn next_doctor(&mut self, what: &str) -> ScheduleResult<DoctorId> {
        let n = self.next_u64(what)?;
        u32::try_from(n)
            .map(DoctorId)
            .map_err(|_| ScheduleError::Parse(format!("{what} {n} is too large")))
    }
}

// ── CSV format ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    monk_id:      u32,
    arrival_tick: u64,
    stops:        String,
}

/// Load a roster in the CSV format from a file.
///
/// Returns `monk_count` plans indexed by `MonkId - 1`.
pub fn load_roster_csv(
    path:         &Path,
    monk_count:   usize,
    doctor_count: usize,
) -> ScheduleResult<Roster> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file, monk_count, doctor_count)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(
    reader:       R,
    monk_count:   usize,
    doctor_count: usize,
) -> ScheduleResult<Roster> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_monk: HashMap<u32, MonkPlan> = HashMap::with_capacity(monk_count.min(1_000_000));

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if row.monk_id == 0 || row.monk_id as usize > monk_count {
            return Err(ScheduleError::Parse(format!(
                "monk_id {} out of range: expected 1..={monk_count}",
                row.monk_id
            )));
        }
        let plan = MonkPlan::new(Tick(row.arrival_tick), parse_stops(&row.stops)?);
        if by_monk.insert(row.monk_id, plan).is_some() {
            return Err(ScheduleError::Parse(format!("duplicate row for monk_id {}", row.monk_id)));
        }
    }

    // ── One plan per monk, in id order ────────────────────────────────────
    let plans = (1..=monk_count as u32)
        .map(|id| by_monk.remove(&id).unwrap_or_default())
        .collect();

    Ok(Roster::new(doctor_count, plans))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_stops(s: &str) -> ScheduleResult<Vec<DoctorId>> {
    s.split_whitespace()
        .map(|n| {
            n.parse::<u32>().map(DoctorId).map_err(|_| {
                ScheduleError::Parse(format!("invalid stop {n:?}: expected a DoctorId (u32)"))
            })
        })
        .collect()
}
